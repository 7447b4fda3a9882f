use serde::{Deserialize, Serialize};

use fairway_core::field::Field;
use fairway_core::player::PlayerId;

use crate::matchup::{MatchResult, Matchup};

/// Tournament points for a match win.
pub const WIN_POINTS: u32 = 2;
/// Tournament points for each side of a halved match.
pub const HALF_POINTS: u32 = 1;

/// A player's round-robin record over completed matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub halves: u32,
    pub losses: u32,
    pub points: u32,
    pub played: u32,
    /// `points / (played * 2)`; absent before any match is complete.
    pub win_pct: Option<f64>,
}

impl Standing {
    fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            wins: 0,
            halves: 0,
            losses: 0,
            points: 0,
            played: 0,
            win_pct: None,
        }
    }
}

/// How many of the round's matches are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchProgress {
    pub complete: usize,
    pub total: usize,
}

impl MatchProgress {
    pub fn of(matchups: &[Matchup]) -> Self {
        Self {
            complete: matchups.iter().filter(|m| m.complete).count(),
            total: matchups.len(),
        }
    }
}

/// Fold completed matches into standings, best first: points, then wins.
/// Incomplete matches contribute nothing.
pub fn build_standings(field: &Field<'_>, matchups: &[Matchup]) -> Vec<Standing> {
    let mut table: Vec<Standing> = field
        .iter()
        .map(|e| Standing::new(e.id(), e.name()))
        .collect();

    for m in matchups {
        let Some(result) = m.result else {
            continue;
        };
        let ids = [m.a.player_id, m.b.player_id];
        for s in table.iter_mut().filter(|s| ids.contains(&s.player_id)) {
            s.played += 1;
            match result {
                MatchResult::Halved => {
                    s.halves += 1;
                    s.points += HALF_POINTS;
                },
                MatchResult::Won { winner, .. } if winner == s.player_id => {
                    s.wins += 1;
                    s.points += WIN_POINTS;
                },
                MatchResult::Won { .. } => s.losses += 1,
            }
        }
    }

    for s in &mut table {
        s.win_pct = (s.played > 0).then(|| f64::from(s.points) / f64::from(s.played * WIN_POINTS));
    }

    sort_standings(&mut table);
    table
}

/// Order by points, then wins, both descending. Stable, so remaining ties
/// keep roster order.
pub fn sort_standings(table: &mut [Standing]) {
    table.sort_by(|a, b| b.points.cmp(&a.points).then(b.wins.cmp(&a.wins)));
}
