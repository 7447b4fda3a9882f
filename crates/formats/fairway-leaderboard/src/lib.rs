pub mod rank;

use fairway_core::card::player_cards;
use fairway_core::catalog::FormatId;
use fairway_core::field::Field;
use fairway_core::format::ScoringFormat;

use rank::{Leaderboard, RankMetric, rank_cards};

/// Rank the whole field by `metric`.
pub fn leaderboard(field: &Field<'_>, metric: RankMetric) -> Leaderboard {
    rank_cards(player_cards(field), metric)
}

/// Stroke-play style formats: net, gross, and Stableford, each settled as a
/// leaderboard over the matching metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokePlay {
    format: FormatId,
    metric: RankMetric,
}

impl StrokePlay {
    pub fn net() -> Self {
        Self {
            format: FormatId::StrokeNet,
            metric: RankMetric::Net,
        }
    }

    pub fn gross() -> Self {
        Self {
            format: FormatId::StrokeGross,
            metric: RankMetric::Gross,
        }
    }

    pub fn stableford() -> Self {
        Self {
            format: FormatId::Stableford,
            metric: RankMetric::Stableford,
        }
    }

    /// The stroke-play engine for a catalog format, if it is one.
    pub fn for_format(id: FormatId) -> Option<Self> {
        match id {
            FormatId::StrokeNet => Some(Self::net()),
            FormatId::StrokeGross => Some(Self::gross()),
            FormatId::Stableford => Some(Self::stableford()),
            _ => None,
        }
    }

    pub fn metric(&self) -> RankMetric {
        self.metric
    }
}

impl ScoringFormat for StrokePlay {
    type Outcome = Leaderboard;

    fn id(&self) -> FormatId {
        self.format
    }

    fn settle(&self, field: &Field<'_>) -> Leaderboard {
        leaderboard(field, self.metric)
    }
}
