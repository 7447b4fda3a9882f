use serde::{Deserialize, Serialize};

use crate::course::{HOLE_COUNT, Segment, Tee};
use crate::handicap::absolute_strokes;
use crate::round::ScoreSheet;

/// Sum of all 18 gross entries. Absent unless every hole is entered.
pub fn gross_total(sheet: &ScoreSheet) -> Option<i32> {
    holes_total(sheet, 0..HOLE_COUNT)
}

/// Sum over a segment. Absent unless every hole in the segment is entered.
pub fn segment_total(sheet: &ScoreSheet, segment: Segment) -> Option<i32> {
    holes_total(sheet, segment.holes())
}

/// Sum over an arbitrary hole set; absent if any hole in the set is missing.
pub fn holes_total(sheet: &ScoreSheet, holes: impl IntoIterator<Item = usize>) -> Option<i32> {
    holes.into_iter().map(|hole| sheet.gross(hole)).sum()
}

/// Sum of entered putts. Present as soon as one hole has putts; no
/// completeness requirement.
pub fn putts_total(sheet: &ScoreSheet) -> Option<i32> {
    (0..HOLE_COUNT)
        .filter_map(|hole| sheet.putts(hole))
        .fold(None, |acc, p| Some(acc.unwrap_or(0) + p))
}

/// Full-round gross minus course handicap; defined only with a full card.
pub fn net_total(sheet: &ScoreSheet, course_handicap: i32) -> Option<i32> {
    gross_total(sheet).map(|gross| gross - course_handicap)
}

/// Stableford points for a hole given net strokes relative to par.
///
/// Scoring rules:
/// - Eagle or better (-2 and below): 4
/// - Birdie: 3
/// - Par: 2
/// - Bogey: 1
/// - Double bogey or worse: 0
pub fn stableford_points(net_to_par: i32) -> i32 {
    match net_to_par {
        d if d <= -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Points for one hole, or `None` if the hole has no gross entry.
pub fn hole_stableford(
    sheet: &ScoreSheet,
    tee: &Tee,
    course_handicap: i32,
    hole: usize,
) -> Option<i32> {
    let gross = sheet.gross(hole)?;
    let strokes = absolute_strokes(course_handicap, tee.hole_stroke_index(hole));
    Some(stableford_points(gross - strokes - tee.hole_par(hole)))
}

/// Stableford total over the entered holes only; partial rounds score
/// partial points.
pub fn stableford_total(sheet: &ScoreSheet, tee: &Tee, course_handicap: i32) -> i32 {
    (0..HOLE_COUNT)
        .filter_map(|hole| hole_stableford(sheet, tee, course_handicap, hole))
        .sum()
}

/// Gross score on a hole classified against par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreClass {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    Worse,
}

impl ScoreClass {
    pub fn classify(gross: i32, par: i32) -> Self {
        match gross - par {
            d if d <= -2 => Self::EagleOrBetter,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            _ => Self::Worse,
        }
    }
}
