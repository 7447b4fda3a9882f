use serde::{Deserialize, Serialize};

use crate::aggregate::{ScoreClass, gross_total, putts_total, segment_total, stableford_total};
use crate::course::{HOLE_COUNT, Segment, TeeId};
use crate::field::{Field, FieldEntry};
use crate::player::PlayerId;

/// Derived per-player totals for a round. Recomputed on demand, never stored.
///
/// This is the row both the leaderboard and report consumers read, so the
/// totals are derived in exactly one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub player_id: PlayerId,
    pub name: String,
    pub tee_id: TeeId,
    pub tee_name: String,
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub front: Option<i32>,
    pub back: Option<i32>,
    pub gross: Option<i32>,
    pub net: Option<i32>,
    /// Absent until at least one hole has a gross entry.
    pub stableford: Option<i32>,
    pub putts: Option<i32>,
    pub holes_played: usize,
    /// All 18 holes entered.
    pub done: bool,
    /// Each entered hole classed against par on the player's tee.
    pub classes: [Option<ScoreClass>; HOLE_COUNT],
}

impl PlayerCard {
    pub fn from_entry(entry: &FieldEntry<'_>) -> Self {
        let sheet = entry.sheet;
        let ch = entry.course_handicap;
        let gross = gross_total(sheet);
        let holes_played = sheet.holes_played();
        Self {
            player_id: entry.id(),
            name: entry.name().to_string(),
            tee_id: entry.tee.id.clone(),
            tee_name: entry.tee.name.clone(),
            handicap_index: entry.player.handicap_index,
            course_handicap: ch,
            front: segment_total(sheet, Segment::Front),
            back: segment_total(sheet, Segment::Back),
            gross,
            net: gross.map(|g| g - ch),
            stableford: (holes_played > 0).then(|| stableford_total(sheet, entry.tee, ch)),
            putts: putts_total(sheet),
            holes_played,
            done: gross.is_some(),
            classes: std::array::from_fn(|hole| {
                entry
                    .gross(hole)
                    .map(|g| ScoreClass::classify(g, entry.tee.hole_par(hole)))
            }),
        }
    }
}

/// Cards for every player in the field, in roster order.
pub fn player_cards(field: &Field<'_>) -> Vec<PlayerCard> {
    field.iter().map(PlayerCard::from_entry).collect()
}
