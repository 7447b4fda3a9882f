use std::fmt;

use serde::{Deserialize, Serialize};

use fairway_core::catalog::FormatId;
use fairway_core::course::{Segment, TeeId};
use fairway_core::field::{Field, FieldEntry};
use fairway_core::format::ScoringFormat;
use fairway_core::player::PlayerId;

/// A player's standing in one Nassau bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetResult {
    Win,
    Loss,
    AllSquare,
    /// No comparison yet: the player's segment is incomplete, or fewer than
    /// two players have finished it.
    Pending,
}

impl fmt::Display for BetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::AllSquare => "All Square",
            Self::Pending => "—",
        })
    }
}

/// Resolve one bet across the field. The lowest defined total wins, the
/// highest loses and everything between is all square.
pub fn resolve(totals: &[Option<i32>]) -> Vec<BetResult> {
    let defined = totals.iter().flatten();
    let (Some(&low), Some(&high)) = (defined.clone().min(), defined.clone().max()) else {
        return vec![BetResult::Pending; totals.len()];
    };
    if defined.count() < 2 {
        return vec![BetResult::Pending; totals.len()];
    }

    totals
        .iter()
        .map(|t| match *t {
            None => BetResult::Pending,
            Some(_) if low == high => BetResult::AllSquare,
            Some(v) if v == low => BetResult::Win,
            Some(v) if v == high => BetResult::Loss,
            Some(_) => BetResult::AllSquare,
        })
        .collect()
}

/// Field-relative net total over a segment; absent unless every hole in the
/// segment has a gross entry.
pub fn segment_net(entry: &FieldEntry<'_>, reference: i32, segment: Segment) -> Option<i32> {
    segment
        .holes()
        .map(|h| entry.net(reference, h))
        .sum::<Option<i32>>()
}

/// One player's net total and result for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLine {
    pub net: Option<i32>,
    pub result: BetResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NassauRow {
    pub player_id: PlayerId,
    pub name: String,
    pub tee_id: TeeId,
    pub front: BetLine,
    pub back: BetLine,
    pub overall: BetLine,
}

impl NassauRow {
    pub fn line(&self, segment: Segment) -> BetLine {
        match segment {
            Segment::Front => self.front,
            Segment::Back => self.back,
            Segment::Overall => self.overall,
        }
    }
}

/// Front, back and overall bets for the whole field, one row per player in
/// roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NassauResult {
    pub rows: Vec<NassauRow>,
}

impl NassauResult {
    pub fn row(&self, id: PlayerId) -> Option<&NassauRow> {
        self.rows.iter().find(|r| r.player_id == id)
    }
}

pub fn settle_nassau(field: &Field<'_>) -> NassauResult {
    let reference = field.min_course_handicap().unwrap_or_default();

    let [front, back, overall] = Segment::ALL.map(|segment| {
        let totals: Vec<Option<i32>> = field
            .iter()
            .map(|e| segment_net(e, reference, segment))
            .collect();
        let results = resolve(&totals);
        tracing::trace!(segment = segment.label(), ?totals, "nassau segment resolved");
        totals
            .into_iter()
            .zip(results)
            .map(|(net, result)| BetLine { net, result })
            .collect::<Vec<_>>()
    });

    let rows = field
        .iter()
        .zip(front)
        .zip(back)
        .zip(overall)
        .map(|(((e, front), back), overall)| NassauRow {
            player_id: e.id(),
            name: e.name().to_string(),
            tee_id: e.tee.id.clone(),
            front,
            back,
            overall,
        })
        .collect();

    NassauResult { rows }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nassau;

impl ScoringFormat for Nassau {
    type Outcome = NassauResult;

    fn id(&self) -> FormatId {
        FormatId::Nassau
    }

    fn settle(&self, field: &Field<'_>) -> NassauResult {
        settle_nassau(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::course::HOLE_COUNT;
    use fairway_core::test_helpers::{
        contract_handles_empty_field, contract_handles_single_player, contract_outcome_serializes,
        contract_settle_is_idempotent, field_round, flat_library, full_round,
    };

    use super::BetResult::{AllSquare, Loss, Pending, Win};

    #[test]
    fn lower_total_wins_higher_loses() {
        assert_eq!(resolve(&[Some(40), Some(38)]), vec![Loss, Win]);
    }

    #[test]
    fn equal_totals_are_all_square() {
        assert_eq!(resolve(&[Some(38), Some(38)]), vec![AllSquare, AllSquare]);
        assert_eq!(resolve(&[Some(38), None, Some(38)]), vec![AllSquare, Pending, AllSquare]);
    }

    #[test]
    fn fewer_than_two_defined_is_pending_for_everyone() {
        assert_eq!(resolve(&[Some(38), None]), vec![Pending, Pending]);
        assert_eq!(resolve(&[None, None]), vec![Pending, Pending]);
        assert!(resolve(&[]).is_empty());
    }

    #[test]
    fn middle_of_the_field_is_all_square() {
        assert_eq!(
            resolve(&[Some(41), Some(38), Some(40), Some(41)]),
            vec![Loss, Win, AllSquare, Loss]
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(Win.to_string(), "Win");
        assert_eq!(Loss.to_string(), "Loss");
        assert_eq!(AllSquare.to_string(), "All Square");
        assert_eq!(Pending.to_string(), "—");
    }

    #[test]
    fn front_nine_forty_against_thirty_eight() {
        let library = flat_library(&[0.0, 0.0]);
        // Front nine pars sum to 36: 40 and 38.
        let mut cards = [
            [4, 5, 4, 4, 3, 5, 3, 4, 4, 4, 4, 3, 5, 4, 4, 4, 3, 5],
            [4, 5, 4, 4, 3, 5, 3, 4, 4, 4, 4, 3, 5, 4, 4, 4, 3, 5],
        ];
        cards[0][0] = 6;
        cards[0][1] = 7;
        cards[1][2] = 6;
        let round = full_round(&cards);
        let field = Field::build(&library, &round).unwrap();
        let nassau = Nassau.settle(&field);

        let first = nassau.row(1).unwrap();
        let second = nassau.row(2).unwrap();
        assert_eq!(first.front.net, Some(40));
        assert_eq!(second.front.net, Some(38));
        assert_eq!(first.front.result, Loss);
        assert_eq!(second.front.result, Win);
        assert_eq!(first.back.result, AllSquare);
        assert_eq!(second.back.result, AllSquare);
        assert_eq!(first.overall.result, Loss);
    }

    #[test]
    fn incomplete_segment_is_pending() {
        let library = flat_library(&[0.0, 0.0]);
        let mut round = full_round(&[[4; HOLE_COUNT], [5; HOLE_COUNT]]);
        let sheet = round.scores.remove(&2).unwrap().with_gross(12, None);
        round.scores.insert(2, sheet);
        let field = Field::build(&library, &round).unwrap();
        let nassau = Nassau.settle(&field);

        assert_eq!(nassau.row(1).unwrap().front.result, Win);
        assert_eq!(nassau.row(2).unwrap().front.result, Loss);
        assert_eq!(nassau.row(2).unwrap().back.net, None);
        assert_eq!(nassau.row(1).unwrap().line(Segment::Back).result, Pending);
        assert_eq!(nassau.row(2).unwrap().line(Segment::Overall).result, Pending);
    }

    #[test]
    fn strokes_are_relative_to_the_field_minimum() {
        // CH 0 and 18: one stroke a hole levels a bogey golfer with a par golfer.
        let library = flat_library(&[0.0, 18.0]);
        let round = full_round(&[[4; HOLE_COUNT], [5; HOLE_COUNT]]);
        let field = Field::build(&library, &round).unwrap();
        let nassau = Nassau.settle(&field);
        for segment in Segment::ALL {
            assert_eq!(nassau.row(1).unwrap().line(segment).result, AllSquare);
        }
        assert_eq!(nassau.row(2).unwrap().overall.net, Some(72));
    }

    #[test]
    fn contracts() {
        let (library, round) = field_round(&[[4; 18], [5; 18], [6; 18]]);
        let field = Field::build(&library, &round).unwrap();
        contract_settle_is_idempotent(&Nassau, &field);
        contract_outcome_serializes(&Nassau, &field);
        assert!(contract_handles_empty_field(&Nassau).rows.is_empty());
        let single = contract_handles_single_player(&Nassau);
        assert_eq!(single.rows[0].overall.result, Pending);
        assert_eq!(single.rows[0].overall.net, Some(72));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn at_most_one_side_without_a_winner(
                totals in proptest::collection::vec(proptest::option::of(30i32..50), 0..8),
            ) {
                let results = resolve(&totals);
                prop_assert_eq!(results.len(), totals.len());
                let wins = results.iter().filter(|r| **r == Win).count();
                let losses = results.iter().filter(|r| **r == Loss).count();
                // Either nobody wins and nobody loses, or both happen.
                prop_assert_eq!(wins == 0, losses == 0);
                for (t, r) in totals.iter().zip(&results) {
                    if t.is_none() {
                        prop_assert_eq!(*r, Pending);
                    }
                }
            }
        }
    }
}
