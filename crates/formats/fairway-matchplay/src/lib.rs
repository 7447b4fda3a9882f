pub mod matchup;
pub mod standings;

use serde::{Deserialize, Serialize};

use fairway_core::catalog::FormatId;
use fairway_core::field::Field;
use fairway_core::format::ScoringFormat;
use fairway_core::player::PlayerId;

use matchup::{MatchView, Matchup, compute_matchup};
use standings::{MatchProgress, Standing, build_standings};

/// Every unordered pair of players in roster order: (0,1), (0,2), ..., (1,2), ...
pub fn compute_all_matchups(field: &Field<'_>) -> Vec<Matchup> {
    let entries = &field.entries;
    let mut out = Vec::with_capacity(entries.len() * entries.len().saturating_sub(1) / 2);
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            out.push(compute_matchup(a, b));
        }
    }
    out
}

/// Round-robin match play settled for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRobin {
    pub matchups: Vec<Matchup>,
    pub standings: Vec<Standing>,
    pub progress: MatchProgress,
}

impl RoundRobin {
    /// The match between two players, in either order.
    pub fn find(&self, x: PlayerId, y: PlayerId) -> Option<&Matchup> {
        self.matchups
            .iter()
            .find(|m| m.involves(x) && m.involves(y) && x != y)
    }

    /// Matrix cell: the match between `row` and `col` from `row`'s side.
    pub fn cell(&self, row: PlayerId, col: PlayerId) -> Option<MatchView> {
        self.find(row, col).and_then(|m| m.view_from(row))
    }
}

/// Round-robin match play: every pair of active players plays a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchPlay;

impl ScoringFormat for MatchPlay {
    type Outcome = RoundRobin;

    fn id(&self) -> FormatId {
        FormatId::Match
    }

    fn settle(&self, field: &Field<'_>) -> RoundRobin {
        let matchups = compute_all_matchups(field);
        let standings = build_standings(field, &matchups);
        let progress = MatchProgress::of(&matchups);
        tracing::debug!(
            complete = progress.complete,
            total = progress.total,
            "round robin settled"
        );
        RoundRobin {
            matchups,
            standings,
            progress,
        }
    }
}
