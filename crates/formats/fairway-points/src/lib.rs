use serde::{Deserialize, Serialize};

use fairway_core::catalog::FormatId;
use fairway_core::course::HOLE_COUNT;
use fairway_core::field::Field;
use fairway_core::format::ScoringFormat;
use fairway_core::player::PlayerId;

/// Points awarded per criterion.
pub const AWARD_POINTS: u32 = 1;

/// Per-hole awards. `None` when nobody qualified or the hole is unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsHole {
    /// 1-based hole number.
    pub hole: usize,
    pub par: i32,
    pub resolved: bool,
    /// First player in roster order at or under par.
    pub bingo: Option<PlayerId>,
    /// Unique lowest gross.
    pub bango: Option<PlayerId>,
    /// Unique lowest gross again; both collapse to the same check.
    pub bongo: Option<PlayerId>,
}

impl PointsHole {
    fn unresolved(hole: usize, par: i32) -> Self {
        Self {
            hole: hole + 1,
            par,
            resolved: false,
            bingo: None,
            bango: None,
            bongo: None,
        }
    }

    pub fn awards(&self) -> impl Iterator<Item = PlayerId> + '_ {
        [self.bingo, self.bango, self.bongo].into_iter().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTotal {
    pub player_id: PlayerId,
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResult {
    pub holes: Vec<PointsHole>,
    /// Every player in roster order.
    pub totals: Vec<PointsTotal>,
}

impl PointsResult {
    pub fn total_for(&self, id: PlayerId) -> u32 {
        self.totals
            .iter()
            .find(|t| t.player_id == id)
            .map_or(0, |t| t.points)
    }

    /// Totals, most points first. Ties keep roster order.
    pub fn standings(&self) -> Vec<&PointsTotal> {
        let mut out: Vec<&PointsTotal> = self.totals.iter().collect();
        out.sort_by(|a, b| b.points.cmp(&a.points));
        out
    }
}

/// Settle a Bingo Bango Bongo round on gross scores against the course's
/// base tee pars. Holes resolve only once every player has a score.
pub fn settle_points(field: &Field<'_>) -> PointsResult {
    let mut totals: Vec<PointsTotal> = field
        .iter()
        .map(|e| PointsTotal {
            player_id: e.id(),
            name: e.name().to_string(),
            points: 0,
        })
        .collect();

    let holes = (0..HOLE_COUNT)
        .map(|hole| {
            let par = field.base_par(hole);
            if !field.hole_complete(hole) {
                return PointsHole::unresolved(hole, par);
            }

            let gross: Vec<(PlayerId, i32)> = field
                .iter()
                .filter_map(|e| e.gross(hole).map(|g| (e.id(), g)))
                .collect();
            let bingo = gross.iter().find(|&&(_, g)| g <= par).map(|&(id, _)| id);
            let low = gross.iter().map(|&(_, g)| g).min();
            let lowest: Vec<PlayerId> = gross
                .iter()
                .filter(|&&(_, g)| Some(g) == low)
                .map(|&(id, _)| id)
                .collect();
            let unique_low = match lowest.as_slice() {
                [only] => Some(*only),
                _ => None,
            };

            let result = PointsHole {
                hole: hole + 1,
                par,
                resolved: true,
                bingo,
                bango: unique_low,
                bongo: unique_low,
            };
            for id in result.awards() {
                if let Some(t) = totals.iter_mut().find(|t| t.player_id == id) {
                    t.points += AWARD_POINTS;
                }
            }
            tracing::trace!(hole = hole + 1, ?bingo, ?unique_low, "points hole resolved");
            result
        })
        .collect();

    PointsResult { holes, totals }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BingoBangoBongo;

impl ScoringFormat for BingoBangoBongo {
    type Outcome = PointsResult;

    fn id(&self) -> FormatId {
        FormatId::BingoBangoBongo
    }

    fn settle(&self, field: &Field<'_>) -> PointsResult {
        settle_points(field)
    }
}
