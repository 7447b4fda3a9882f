use serde::{Deserialize, Serialize};

use fairway_core::catalog::FormatId;
use fairway_core::course::HOLE_COUNT;
use fairway_core::field::Field;
use fairway_core::format::ScoringFormat;
use fairway_core::player::PlayerId;

/// Skins a hole is worth before any carry.
pub const BASE_STAKE: u32 = 1;

/// What happened on a hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HoleOutcome {
    /// A unique low net took the stake.
    Won { player_id: PlayerId, name: String },
    /// Tied low net; the stake rolls into the next hole.
    Carried,
    /// Not every player has a score yet.
    Unresolved,
}

/// Ledger line for one hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsHole {
    /// 1-based hole number.
    pub hole: usize,
    pub par: i32,
    /// Skins on the line for this hole: the base stake plus any carry.
    pub stake: u32,
    pub outcome: HoleOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsTotal {
    pub player_id: PlayerId,
    pub name: String,
    pub skins: u32,
}

/// Settled skins game: the hole ledger, a total for every player (roster
/// order) and whatever carry is still outstanding after the last hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsResult {
    pub holes: Vec<SkinsHole>,
    pub totals: Vec<SkinsTotal>,
    pub carry: u32,
}

impl SkinsResult {
    pub fn total_for(&self, id: PlayerId) -> u32 {
        self.totals
            .iter()
            .find(|t| t.player_id == id)
            .map_or(0, |t| t.skins)
    }

    /// Players holding at least one skin, most first. Ties keep roster order.
    pub fn winners(&self) -> Vec<&SkinsTotal> {
        let mut out: Vec<&SkinsTotal> = self.totals.iter().filter(|t| t.skins > 0).collect();
        out.sort_by(|a, b| b.skins.cmp(&a.skins));
        out
    }

    /// Skins awarded so far. Together with the outstanding carry this never
    /// exceeds one skin per resolved hole.
    pub fn awarded(&self) -> u32 {
        self.totals.iter().map(|t| t.skins).sum()
    }
}

/// Walk the holes in order, carrying tied stakes forward. Nets are relative
/// to the lowest course handicap in the field.
pub fn settle_skins(field: &Field<'_>) -> SkinsResult {
    let reference = field.min_course_handicap().unwrap_or_default();
    let mut totals: Vec<SkinsTotal> = field
        .iter()
        .map(|e| SkinsTotal {
            player_id: e.id(),
            name: e.name().to_string(),
            skins: 0,
        })
        .collect();

    let mut carry = 0;
    let mut holes = Vec::with_capacity(HOLE_COUNT);
    for hole in 0..HOLE_COUNT {
        let stake = BASE_STAKE + carry;
        let par = field.base_par(hole);

        let outcome = if field.hole_complete(hole) {
            let nets: Vec<(usize, i32)> = field
                .iter()
                .enumerate()
                .filter_map(|(i, e)| e.net(reference, hole).map(|n| (i, n)))
                .collect();
            let low = nets.iter().map(|&(_, n)| n).min().unwrap_or_default();
            let mut at_low = nets.iter().filter(|&&(_, n)| n == low);
            match (at_low.next(), at_low.next()) {
                (Some(&(i, _)), None) => {
                    totals[i].skins += stake;
                    carry = 0;
                    tracing::trace!(hole = hole + 1, stake, player = totals[i].player_id, "skin won");
                    HoleOutcome::Won {
                        player_id: totals[i].player_id,
                        name: totals[i].name.clone(),
                    }
                },
                _ => {
                    carry = stake;
                    tracing::debug!(hole = hole + 1, carry, "skin carried");
                    HoleOutcome::Carried
                },
            }
        } else {
            HoleOutcome::Unresolved
        };

        holes.push(SkinsHole {
            hole: hole + 1,
            par,
            stake,
            outcome,
        });
    }

    SkinsResult {
        holes,
        totals,
        carry,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Skins;

impl ScoringFormat for Skins {
    type Outcome = SkinsResult;

    fn id(&self) -> FormatId {
        FormatId::Skins
    }

    fn settle(&self, field: &Field<'_>) -> SkinsResult {
        settle_skins(field)
    }
}
