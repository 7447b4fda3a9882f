use crate::course::{CourseId, TeeId};
use crate::player::PlayerId;

/// A library fixture that breaks a structural rule. Raised at the data-entry
/// boundary; the engines assume validated data.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    StrokeIndexNotPermutation { tee: TeeId },
    HoleParOutOfRange { tee: TeeId, hole: usize, par: u8 },
    ParMismatch { tee: TeeId, declared: u32, summed: u32 },
    SlopeOutOfRange { tee: TeeId, slope: u32 },
    CourseWithoutTees { course: CourseId },
    DuplicateTee { course: CourseId, tee: TeeId },
    MultipleActiveCourses { count: usize },
    HandicapIndexOutOfRange { player: PlayerId, index: f64 },
    GrossOutOfRange { player: PlayerId, hole: usize, gross: u8 },
    PuttsOutOfRange { player: PlayerId, hole: usize, putts: u8 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrokeIndexNotPermutation { tee } => {
                write!(f, "tee {tee}: stroke indices must be a permutation of 1..=18")
            },
            Self::HoleParOutOfRange { tee, hole, par } => {
                write!(f, "tee {tee}: hole {} has invalid par {par}", hole + 1)
            },
            Self::ParMismatch {
                tee,
                declared,
                summed,
            } => write!(
                f,
                "tee {tee}: declared par {declared} but hole pars sum to {summed}"
            ),
            Self::SlopeOutOfRange { tee, slope } => {
                write!(f, "tee {tee}: slope {slope} outside 55..=155")
            },
            Self::CourseWithoutTees { course } => write!(f, "course {course} has no tees"),
            Self::DuplicateTee { course, tee } => {
                write!(f, "course {course} lists tee {tee} more than once")
            },
            Self::MultipleActiveCourses { count } => {
                write!(f, "{count} courses are active, at most one may be")
            },
            Self::HandicapIndexOutOfRange { player, index } => {
                write!(f, "player {player}: handicap index {index} outside 0..=54")
            },
            Self::GrossOutOfRange { player, hole, gross } => {
                write!(f, "player {player}: hole {} gross {gross} is not a stroke count", hole + 1)
            },
            Self::PuttsOutOfRange { player, hole, putts } => {
                write!(f, "player {player}: hole {} putts {putts} outside 0..=5", hole + 1)
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a round's comparison field could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    NoCourse,
    CourseWithoutTees(CourseId),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCourse => write!(f, "library has no courses"),
            Self::CourseWithoutTees(id) => write!(f, "course {id} has no tees"),
        }
    }
}

impl std::error::Error for FieldError {}
