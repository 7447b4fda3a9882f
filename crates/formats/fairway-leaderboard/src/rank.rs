use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use fairway_core::card::PlayerCard;

/// The total a leaderboard orders players by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    #[default]
    Net,
    Stableford,
    Putts,
    Gross,
}

impl RankMetric {
    pub const ALL: [RankMetric; 4] = [
        RankMetric::Net,
        RankMetric::Stableford,
        RankMetric::Putts,
        RankMetric::Gross,
    ];

    /// Lower is better for every metric except Stableford.
    pub fn ascending(self) -> bool {
        !matches!(self, Self::Stableford)
    }

    pub fn value(self, card: &PlayerCard) -> Option<i32> {
        match self {
            Self::Net => card.net,
            Self::Stableford => card.stableford,
            Self::Putts => card.putts,
            Self::Gross => card.gross,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Net => "Low Net",
            Self::Stableford => "Stableford",
            Self::Putts => "Total Putts",
            Self::Gross => "Gross",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown leaderboard metric: {}", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for RankMetric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "net" => Ok(Self::Net),
            "stableford" => Ok(Self::Stableford),
            "putts" => Ok(Self::Putts),
            "gross" => Ok(Self::Gross),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

/// A player's place on the board. Players without a value for the metric
/// are unranked rather than placed last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Placed(usize),
    Unranked,
}

impl Rank {
    pub fn position(self) -> Option<usize> {
        match self {
            Self::Placed(n) => Some(n),
            Self::Unranked => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed(1) => f.write_str("🥇"),
            Self::Placed(2) => f.write_str("🥈"),
            Self::Placed(3) => f.write_str("🥉"),
            Self::Placed(n) => write!(f, "#{n}"),
            Self::Unranked => f.write_str("—"),
        }
    }
}

/// One row of the board: the player's card and their rank under the metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: Rank,
    /// Rank rendered for display (medal, `#N`, or `—`).
    pub rank_label: String,
    pub card: PlayerCard,
}

/// All active players ranked by one metric. Rows stay in roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub metric: RankMetric,
    pub rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    /// Rows in finishing order; unranked players follow in roster order.
    pub fn standings(&self) -> Vec<&LeaderboardRow> {
        let mut rows: Vec<&LeaderboardRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.rank.position().unwrap_or(usize::MAX));
        rows
    }

    pub fn leader(&self) -> Option<&LeaderboardRow> {
        self.rows.iter().find(|r| r.rank == Rank::Placed(1))
    }
}

/// Rank `cards` by `metric`. Ranks are 1..=N in sorted order; ties keep
/// roster order and still receive distinct ranks.
pub fn rank_cards(cards: Vec<PlayerCard>, metric: RankMetric) -> Leaderboard {
    let mut order: Vec<(usize, i32)> = cards
        .iter()
        .enumerate()
        .filter_map(|(i, card)| metric.value(card).map(|v| (i, v)))
        .collect();
    if metric.ascending() {
        order.sort_by_key(|&(_, v)| v);
    } else {
        order.sort_by_key(|&(_, v)| std::cmp::Reverse(v));
    }

    let mut ranks = vec![Rank::Unranked; cards.len()];
    for (place, &(i, _)) in order.iter().enumerate() {
        ranks[i] = Rank::Placed(place + 1);
    }
    tracing::trace!(
        ?metric,
        placed = order.len(),
        unranked = cards.len() - order.len(),
        "leaderboard ranked"
    );

    let rows = cards
        .into_iter()
        .zip(ranks)
        .map(|(card, rank)| LeaderboardRow {
            rank,
            rank_label: rank.to_string(),
            card,
        })
        .collect();

    Leaderboard { metric, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u64, gross: Option<i32>, stableford: Option<i32>, putts: Option<i32>) -> PlayerCard {
        PlayerCard {
            player_id: id,
            name: format!("Player{id}"),
            tee_id: "blue".to_string(),
            tee_name: "Blue".to_string(),
            handicap_index: 10.0,
            course_handicap: 10,
            front: None,
            back: None,
            gross,
            net: gross.map(|g| g - 10),
            stableford,
            putts,
            holes_played: if gross.is_some() { 18 } else { 0 },
            done: gross.is_some(),
            classes: [None; 18],
        }
    }

    #[test]
    fn net_ranks_ascending() {
        let board = rank_cards(
            vec![
                card(1, Some(90), Some(30), Some(34)),
                card(2, Some(82), Some(38), Some(30)),
                card(3, Some(86), Some(33), Some(31)),
            ],
            RankMetric::Net,
        );
        let ranks: Vec<Rank> = board.rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![Rank::Placed(3), Rank::Placed(1), Rank::Placed(2)]);
        assert_eq!(board.leader().unwrap().card.player_id, 2);
    }

    #[test]
    fn stableford_ranks_descending() {
        let board = rank_cards(
            vec![card(1, None, Some(30), None), card(2, None, Some(38), None)],
            RankMetric::Stableford,
        );
        assert_eq!(board.rows[1].rank, Rank::Placed(1));
        assert_eq!(board.rows[0].rank, Rank::Placed(2));
    }

    #[test]
    fn absent_metric_is_unranked_not_last() {
        let board = rank_cards(
            vec![card(1, None, None, None), card(2, Some(80), Some(36), None)],
            RankMetric::Gross,
        );
        assert_eq!(board.rows[0].rank, Rank::Unranked);
        assert_eq!(board.rows[0].rank_label, "—");
        assert_eq!(board.rows[1].rank, Rank::Placed(1));
        // Unranked players still appear on the board.
        assert_eq!(board.rows.len(), 2);
    }

    #[test]
    fn ties_keep_roster_order() {
        let board = rank_cards(
            vec![card(1, Some(80), None, None), card(2, Some(80), None, None)],
            RankMetric::Gross,
        );
        assert_eq!(board.rows[0].rank, Rank::Placed(1));
        assert_eq!(board.rows[1].rank, Rank::Placed(2));
    }

    #[test]
    fn metric_parses_case_insensitively() {
        assert_eq!("Stableford".parse::<RankMetric>(), Ok(RankMetric::Stableford));
        assert_eq!(" net ".parse::<RankMetric>(), Ok(RankMetric::Net));
        assert!("birdies".parse::<RankMetric>().is_err());
    }

    #[test]
    fn medal_labels() {
        assert_eq!(Rank::Placed(1).to_string(), "🥇");
        assert_eq!(Rank::Placed(2).to_string(), "🥈");
        assert_eq!(Rank::Placed(3).to_string(), "🥉");
        assert_eq!(Rank::Placed(4).to_string(), "#4");
        assert_eq!(Rank::Unranked.to_string(), "—");
    }

    #[test]
    fn standings_put_unranked_last() {
        let board = rank_cards(
            vec![
                card(1, None, None, None),
                card(2, Some(85), None, None),
                card(3, Some(80), None, None),
            ],
            RankMetric::Gross,
        );
        let order: Vec<u64> = board.standings().iter().map(|r| r.card.player_id).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn placed_ranks_are_dense_and_unique(
                values in proptest::collection::vec(proptest::option::of(60i32..120), 0..10),
            ) {
                let cards: Vec<PlayerCard> = values
                    .iter()
                    .enumerate()
                    .map(|(i, &g)| card(i as u64 + 1, g, None, None))
                    .collect();
                let board = rank_cards(cards, RankMetric::Gross);
                let mut placed: Vec<usize> = board.rows.iter().filter_map(|r| r.rank.position()).collect();
                placed.sort_unstable();
                let expected: Vec<usize> = (1..=values.iter().flatten().count()).collect();
                prop_assert_eq!(placed, expected);
            }
        }
    }
}
