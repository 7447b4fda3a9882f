//! Course handicap and per-hole stroke allocation.
//!
//! Two references are in use. Match-type games (match play, skins, Nassau)
//! allocate the *difference* between a player's course handicap and the lowest
//! course handicap in the comparison group, so the same player can receive a
//! different number of strokes against different opponents. Stableford is
//! self-referential and allocates the full course handicap against zero.

use crate::course::{HOLE_COUNT, Tee};

/// Slope of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// `round(index * slope / 113 + (rating - par))`, halves rounded up.
///
/// A strong player on an easy tee gets a negative handicap. Only absurd
/// unvalidated inputs are bounded, to the `i16` range, so totals built on
/// the result cannot overflow.
pub fn course_handicap(index: f64, tee: &Tee) -> i32 {
    let raw = index * (f64::from(tee.slope) / STANDARD_SLOPE) + (tee.rating - f64::from(tee.par));
    (raw + 0.5)
        .floor()
        .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i32
}

/// Strokes on a hole when `strokes` are spread one lap of 18 at a time,
/// lowest stroke index first.
///
/// Negative totals give strokes back starting from the highest stroke index.
pub fn allocate(strokes: i32, stroke_index: i32) -> i32 {
    let laps = strokes.div_euclid(HOLE_COUNT as i32);
    let extra = strokes.rem_euclid(HOLE_COUNT as i32);
    laps + i32::from(stroke_index <= extra)
}

/// Field-relative strokes: `player_ch` is measured against `reference_ch`,
/// the lowest course handicap in the comparison group.
pub fn strokes_received(player_ch: i32, reference_ch: i32, stroke_index: i32) -> i32 {
    allocate(player_ch.saturating_sub(reference_ch), stroke_index)
}

/// Absolute strokes (reference zero), used for Stableford.
pub fn absolute_strokes(course_handicap: i32, stroke_index: i32) -> i32 {
    allocate(course_handicap, stroke_index)
}

/// Strokes per hole for a whole round on `tee`.
pub fn stroke_table(strokes: i32, tee: &Tee) -> [i32; HOLE_COUNT] {
    std::array::from_fn(|hole| allocate(strokes, tee.hole_stroke_index(hole)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{blue_tee, gold_tee};

    #[test]
    fn course_handicap_matches_slope_formula() {
        let blue = blue_tee();
        assert_eq!(course_handicap(8.4, &blue), 13);
        assert_eq!(course_handicap(14.2, &blue), 20);
        assert_eq!(course_handicap(5.1, &blue), 9);
        assert_eq!(course_handicap(22.6, &gold_tee()), 27);
    }

    #[test]
    fn course_handicap_can_be_negative() {
        let mut easy = blue_tee();
        easy.rating = 68.0;
        easy.slope = 113;
        // 0.0 + (68 - 72) = -4
        assert_eq!(course_handicap(0.0, &easy), -4);
    }

    #[test]
    fn halves_round_up() {
        let mut tee = blue_tee();
        tee.slope = 113;
        tee.rating = 72.0;
        assert_eq!(course_handicap(2.5, &tee), 3);
        assert_eq!(course_handicap(-2.5, &tee), -2);
    }

    #[test]
    fn absurd_index_is_bounded() {
        let blue = blue_tee();
        assert_eq!(course_handicap(1e12, &blue), i32::from(i16::MAX));
        assert_eq!(course_handicap(-1e12, &blue), i32::from(i16::MIN));
        // Far apart handicaps still allocate without overflowing.
        assert_eq!(strokes_received(i32::MAX, i32::MIN, 1), allocate(i32::MAX, 1));
    }

    #[test]
    fn zero_delta_gives_no_strokes() {
        for si in 1..=18 {
            assert_eq!(strokes_received(12, 12, si), 0);
        }
    }

    #[test]
    fn delta_under_eighteen_hits_hardest_holes() {
        // 5 strokes: stroke index 1..=5 get one each.
        assert_eq!(strokes_received(15, 10, 1), 1);
        assert_eq!(strokes_received(15, 10, 5), 1);
        assert_eq!(strokes_received(15, 10, 6), 0);
    }

    #[test]
    fn second_lap_adds_to_every_hole() {
        // 20 strokes: everyone gets 1, stroke index 1 and 2 get a second.
        assert_eq!(strokes_received(20, 0, 1), 2);
        assert_eq!(strokes_received(20, 0, 2), 2);
        assert_eq!(strokes_received(20, 0, 3), 1);
        assert_eq!(strokes_received(20, 0, 18), 1);
    }

    #[test]
    fn exactly_eighteen_is_one_per_hole() {
        for si in 1..=18 {
            assert_eq!(absolute_strokes(18, si), 1);
        }
    }

    #[test]
    fn plus_handicap_gives_back_on_easiest_holes() {
        assert_eq!(absolute_strokes(-2, 16), 0);
        assert_eq!(absolute_strokes(-2, 17), -1);
        assert_eq!(absolute_strokes(-2, 18), -1);
    }

    #[test]
    fn stroke_table_follows_tee_indices() {
        let tee = blue_tee();
        let table = stroke_table(1, &tee);
        let hardest = tee.stroke_index.iter().position(|&si| si == 1).unwrap();
        assert_eq!(table[hardest], 1);
        assert_eq!(table.iter().sum::<i32>(), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn allocation_sums_to_total(strokes in -40i32..80) {
                let total: i32 = (1..=18).map(|si| allocate(strokes, si)).sum();
                prop_assert_eq!(total, strokes);
            }

            #[test]
            fn harder_holes_never_get_fewer_strokes(strokes in -40i32..80, si in 1i32..18) {
                prop_assert!(allocate(strokes, si) >= allocate(strokes, si + 1));
            }

            #[test]
            fn relative_strokes_are_non_negative(reference in -5i32..30, delta in 0i32..60, si in 1i32..=18) {
                prop_assert!(strokes_received(reference + delta, reference, si) >= 0);
            }
        }
    }
}
