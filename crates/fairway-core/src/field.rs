use crate::course::{Course, Tee};
use crate::error::FieldError;
use crate::handicap::{course_handicap, strokes_received};
use crate::player::{Player, PlayerId};
use crate::round::{Library, Round, ScoreSheet};

/// One active player resolved against the active course for a round.
#[derive(Debug, Clone, Copy)]
pub struct FieldEntry<'a> {
    pub player: &'a Player,
    pub tee: &'a Tee,
    pub sheet: &'a ScoreSheet,
    pub course_handicap: i32,
}

impl FieldEntry<'_> {
    pub fn id(&self) -> PlayerId {
        self.player.id
    }

    pub fn name(&self) -> &str {
        &self.player.name
    }

    pub fn gross(&self, hole: usize) -> Option<i32> {
        self.sheet.gross(hole)
    }

    /// Strokes received on `hole` against `reference_ch`.
    pub fn strokes(&self, reference_ch: i32, hole: usize) -> i32 {
        strokes_received(
            self.course_handicap,
            reference_ch,
            self.tee.hole_stroke_index(hole),
        )
    }

    /// Field-relative net on `hole`, absent when the hole has no gross entry.
    pub fn net(&self, reference_ch: i32, hole: usize) -> Option<i32> {
        self.gross(hole).map(|g| g - self.strokes(reference_ch, hole))
    }
}

/// The comparison group for a round: active players in roster order.
///
/// Borrowed from the library and round snapshots; rebuilding it is cheap and
/// every engine derives its results from it afresh.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    pub course: &'a Course,
    pub entries: Vec<FieldEntry<'a>>,
}

impl<'a> Field<'a> {
    pub fn build(library: &'a Library, round: &'a Round) -> Result<Self, FieldError> {
        let course = library.active_course().ok_or(FieldError::NoCourse)?;
        if course.tees.is_empty() {
            return Err(FieldError::CourseWithoutTees(course.id.clone()));
        }

        let mut entries = Vec::new();
        for player in library.active_players() {
            let tee = course
                .tee_or_first(round.tee_for(player))
                .ok_or_else(|| FieldError::CourseWithoutTees(course.id.clone()))?;
            entries.push(FieldEntry {
                player,
                tee,
                sheet: round.sheet(player.id),
                course_handicap: course_handicap(player.handicap_index, tee),
            });
        }

        tracing::debug!(
            course = %course.id,
            players = entries.len(),
            "field built"
        );

        Ok(Self { course, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry<'a>> {
        self.entries.iter()
    }

    pub fn entry(&self, id: PlayerId) -> Option<&FieldEntry<'a>> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Lowest course handicap in the field; the reference for field-relative
    /// stroke allocation.
    pub fn min_course_handicap(&self) -> Option<i32> {
        self.entries.iter().map(|e| e.course_handicap).min()
    }

    /// Whether every player has a gross entry on `hole`. False for an empty field.
    pub fn hole_complete(&self, hole: usize) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.gross(hole).is_some())
    }

    /// Par of `hole` on the course's base tee.
    pub fn base_par(&self, hole: usize) -> i32 {
        self.course
            .base_tee()
            .map(|t| t.hole_par(hole))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormatId;
    use crate::test_helpers::make_library;

    #[test]
    fn field_keeps_roster_order_and_skips_inactive() {
        let mut lib = make_library(4);
        lib.roster[1].active = false;
        let round = Round::new("r", "2026-10-17", FormatId::StrokeNet);
        let field = Field::build(&lib, &round).unwrap();
        let ids: Vec<PlayerId> = field.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn round_override_picks_the_tee() {
        let lib = make_library(2);
        let round = Round::new("r", "2026-10-17", FormatId::StrokeNet).with_tee(2, "gold");
        let field = Field::build(&lib, &round).unwrap();
        assert_eq!(field.entry(1).unwrap().tee.id, "blue");
        assert_eq!(field.entry(2).unwrap().tee.id, "gold");
    }

    #[test]
    fn missing_sheet_reads_as_empty() {
        let lib = make_library(1);
        let round = Round::new("r", "2026-10-17", FormatId::StrokeNet);
        let field = Field::build(&lib, &round).unwrap();
        assert_eq!(field.entry(1).unwrap().sheet, &ScoreSheet::EMPTY);
        assert!(!field.hole_complete(0));
    }

    #[test]
    fn library_without_courses_is_rejected() {
        let lib = Library::default();
        let round = Round::new("r", "2026-10-17", FormatId::StrokeNet);
        assert!(matches!(
            Field::build(&lib, &round),
            Err(FieldError::NoCourse)
        ));
    }

    #[test]
    fn empty_field_has_no_reference_handicap() {
        let mut lib = make_library(2);
        for p in &mut lib.roster {
            p.active = false;
        }
        let round = Round::new("r", "2026-10-17", FormatId::StrokeNet);
        let field = Field::build(&lib, &round).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.min_course_handicap(), None);
        assert!(!field.hole_complete(0));
    }
}
