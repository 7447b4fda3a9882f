pub mod aggregate;
pub mod card;
pub mod catalog;
pub mod course;
pub mod error;
pub mod field;
pub mod format;
pub mod handicap;
pub mod player;
pub mod round;
pub mod snapshot;
pub mod validate;

pub use error::{FieldError, ValidationError};
pub use format::ScoringFormat;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::catalog::FormatId;
    use crate::course::{Course, HOLE_COUNT, Tee};
    use crate::field::Field;
    use crate::format::ScoringFormat;
    use crate::player::{Player, PlayerId};
    use crate::round::{Library, Round, ScoreSheet};

    /// Hole pars shared by the fixture tees (out 36, in 36).
    pub const FIXTURE_PARS: [u8; HOLE_COUNT] = [4, 5, 4, 4, 3, 5, 3, 4, 4, 4, 4, 3, 5, 4, 4, 4, 3, 5];

    /// Stroke indices shared by the fixture tees.
    pub const FIXTURE_STROKE_INDEX: [u8; HOLE_COUNT] =
        [5, 13, 11, 3, 15, 7, 17, 1, 9, 10, 4, 16, 6, 12, 2, 8, 18, 14];

    const ROSTER: [(&str, f64); 6] = [
        ("John Smith", 8.4),
        ("Mike Johnson", 14.2),
        ("Dave Williams", 22.6),
        ("Tom Brown", 5.1),
        ("Chris Davis", 18.9),
        ("Steve Miller", 11.3),
    ];

    /// Blue tees: rating 74.5, slope 143.
    pub fn blue_tee() -> Tee {
        Tee {
            id: "blue".to_string(),
            name: "Blue".to_string(),
            color: "#1565C0".to_string(),
            rating: 74.5,
            slope: 143,
            par: 72,
            pars: FIXTURE_PARS,
            stroke_index: FIXTURE_STROKE_INDEX,
        }
    }

    /// Gold tees: rating 72.1, slope 135.
    pub fn gold_tee() -> Tee {
        Tee {
            id: "gold".to_string(),
            name: "Gold".to_string(),
            color: "#F9A825".to_string(),
            rating: 72.1,
            slope: 135,
            ..blue_tee()
        }
    }

    /// A tee of standard difficulty: course handicap equals the rounded index.
    pub fn flat_tee() -> Tee {
        Tee {
            id: "flat".to_string(),
            name: "Flat".to_string(),
            color: "#CCCCCC".to_string(),
            rating: 72.0,
            slope: 113,
            ..blue_tee()
        }
    }

    /// A copy of the blue tee under another id.
    pub fn make_tee(id: &str) -> Tee {
        Tee {
            id: id.to_string(),
            name: id.to_string(),
            ..blue_tee()
        }
    }

    /// Create `n` active players with sequential IDs starting at 1, all on blue.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| {
                let (name, index) = ROSTER[i % ROSTER.len()];
                Player::new(i as PlayerId + 1, name, index, "blue")
            })
            .collect()
    }

    /// A library with `n` players, an active course (blue, gold, flat) and an
    /// inactive second course.
    pub fn make_library(n: usize) -> Library {
        Library {
            roster: make_players(n),
            courses: vec![
                Course {
                    id: "course_1".to_string(),
                    name: "Pebble Beach Golf Links".to_string(),
                    active: true,
                    tees: vec![blue_tee(), gold_tee(), flat_tee()],
                },
                Course {
                    id: "course_2".to_string(),
                    name: "Augusta National".to_string(),
                    active: false,
                    tees: vec![make_tee("champ")],
                },
            ],
        }
    }

    /// A library whose players sit on the flat tee, so their course handicaps
    /// are exactly `indices` (rounded).
    pub fn flat_library(indices: &[f64]) -> Library {
        let mut library = make_library(indices.len());
        for (player, &index) in library.roster.iter_mut().zip(indices) {
            player.handicap_index = index;
            player.default_tee = "flat".to_string();
        }
        library
    }

    pub fn sheet_from(gross: [u8; HOLE_COUNT]) -> ScoreSheet {
        ScoreSheet::from_gross(gross)
    }

    /// A round where player `i + 1` has entered every hole of `cards[i]`.
    pub fn full_round(cards: &[[u8; HOLE_COUNT]]) -> Round {
        let mut round = Round::new("Saturday Round", "2026-10-17", FormatId::StrokeNet);
        for (i, card) in cards.iter().enumerate() {
            round.scores.insert(i as PlayerId + 1, sheet_from(*card));
        }
        round
    }

    /// Library plus a fully entered round, one card per player.
    pub fn field_round(cards: &[[u8; HOLE_COUNT]]) -> (Library, Round) {
        (make_library(cards.len()), full_round(cards))
    }

    // ================================================================
    // Scoring Format Contract Tests
    // ================================================================
    // Every ScoringFormat implementation runs these from its own
    // #[cfg(test)] module with a concrete engine and field.

    /// Settling twice on an unchanged snapshot must give byte-identical output.
    pub fn contract_settle_is_idempotent<F: ScoringFormat>(
        format: &F,
        field: &Field<'_>,
    ) -> F::Outcome {
        let first = format.settle(field);
        let second = format.settle(field);
        assert_eq!(first, second, "settle() must not depend on hidden state");
        let a = serde_json::to_vec(&first).expect("outcome must serialize");
        let b = serde_json::to_vec(&second).expect("outcome must serialize");
        assert_eq!(a, b, "serialized outcomes must be byte-identical");
        first
    }

    /// Outcomes must encode through both persistence codecs.
    pub fn contract_outcome_serializes<F: ScoringFormat>(format: &F, field: &Field<'_>) {
        let outcome = format.settle(field);
        let json = serde_json::to_vec(&outcome).expect("outcome must encode as JSON");
        assert!(!json.is_empty());
        let packed = rmp_serde::to_vec_named(&outcome).expect("outcome must encode as MessagePack");
        assert!(!packed.is_empty());
    }

    /// A field with no active players must settle without panicking.
    pub fn contract_handles_empty_field<F: ScoringFormat>(format: &F) -> F::Outcome {
        let mut library = make_library(3);
        for p in &mut library.roster {
            p.active = false;
        }
        let round = full_round(&[[4; HOLE_COUNT]; 3]);
        let field = Field::build(&library, &round).expect("fixture field");
        assert!(field.is_empty());
        format.settle(&field)
    }

    /// A one-player field must settle without panicking.
    pub fn contract_handles_single_player<F: ScoringFormat>(format: &F) -> F::Outcome {
        let (library, round) = field_round(&[[4; HOLE_COUNT]]);
        let field = Field::build(&library, &round).expect("fixture field");
        format.settle(&field)
    }
}
