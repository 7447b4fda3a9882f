use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Holes in a regulation round.
pub const HOLE_COUNT: usize = 18;

/// Holes in one nine.
pub const NINE: usize = 9;

pub type TeeId = String;
pub type CourseId = String;

/// One set of tee markers on a course, with its rating and hole layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tee {
    pub id: TeeId,
    pub name: String,
    /// Display color as a `#RRGGBB` string.
    #[serde(default)]
    pub color: String,
    pub rating: f64,
    pub slope: u32,
    /// Sum of the hole pars.
    pub par: u32,
    pub pars: [u8; HOLE_COUNT],
    /// Allocation priority per hole; 1 receives a stroke first.
    pub stroke_index: [u8; HOLE_COUNT],
}

impl Tee {
    pub fn hole_par(&self, hole: usize) -> i32 {
        i32::from(self.pars[hole])
    }

    pub fn hole_stroke_index(&self, hole: usize) -> i32 {
        i32::from(self.stroke_index[hole])
    }
}

/// A course and its tees. At most one course in a library is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    pub tees: Vec<Tee>,
}

impl Course {
    /// Look up a tee by id, falling back to the first tee of the course.
    pub fn tee_or_first(&self, id: &str) -> Option<&Tee> {
        match self.tees.iter().find(|t| t.id == id) {
            Some(tee) => Some(tee),
            None => {
                let fallback = self.tees.first();
                if let Some(tee) = fallback {
                    tracing::warn!(
                        course = %self.id,
                        requested = id,
                        fallback = %tee.id,
                        "unknown tee, using the course's first tee"
                    );
                }
                fallback
            },
        }
    }

    /// The tee whose hole pars stand in for "the course par" in field-wide games.
    pub fn base_tee(&self) -> Option<&Tee> {
        self.tees.first()
    }
}

/// A named subset of holes that can be totaled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Front,
    Back,
    Overall,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Front, Segment::Back, Segment::Overall];

    /// Zero-based hole indices covered by this segment.
    pub fn holes(self) -> Range<usize> {
        match self {
            Self::Front => 0..NINE,
            Self::Back => NINE..HOLE_COUNT,
            Self::Overall => 0..HOLE_COUNT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Front 9",
            Self::Back => "Back 9",
            Self::Overall => "Overall 18",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_tee;

    #[test]
    fn segments_partition_the_round() {
        let front: Vec<usize> = Segment::Front.holes().collect();
        let back: Vec<usize> = Segment::Back.holes().collect();
        assert_eq!(front.len() + back.len(), HOLE_COUNT);
        assert_eq!(front.last(), Some(&8));
        assert_eq!(back.first(), Some(&9));
        assert_eq!(Segment::Overall.holes().len(), HOLE_COUNT);
    }

    #[test]
    fn unknown_tee_falls_back_to_first() {
        let course = Course {
            id: "c1".to_string(),
            name: "Links".to_string(),
            active: true,
            tees: vec![make_tee("blue"), make_tee("gold")],
        };
        assert_eq!(course.tee_or_first("gold").unwrap().id, "gold");
        assert_eq!(course.tee_or_first("red").unwrap().id, "blue");
    }

    #[test]
    fn tee_without_holes_fails_to_decode() {
        let json = r#"{"id":"x","name":"X","rating":70.0,"slope":113,"par":72,
            "pars":[4,4,4],"stroke_index":[1,2,3]}"#;
        assert!(serde_json::from_str::<Tee>(json).is_err());
    }
}
