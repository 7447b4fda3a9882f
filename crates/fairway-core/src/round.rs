use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{FormatId, lenient_format_id};
use crate::course::{Course, HOLE_COUNT, TeeId};
use crate::player::{Player, PlayerId};

/// Raw per-hole entries for one player. `None` means the hole has not been entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    #[serde(default)]
    pub gross: [Option<u8>; HOLE_COUNT],
    #[serde(default)]
    pub putts: [Option<u8>; HOLE_COUNT],
}

impl ScoreSheet {
    pub const EMPTY: ScoreSheet = ScoreSheet {
        gross: [None; HOLE_COUNT],
        putts: [None; HOLE_COUNT],
    };

    /// Build a sheet with every hole's gross filled in and no putts.
    pub fn from_gross(gross: [u8; HOLE_COUNT]) -> Self {
        Self {
            gross: gross.map(Some),
            putts: [None; HOLE_COUNT],
        }
    }

    pub fn gross(&self, hole: usize) -> Option<i32> {
        self.gross.get(hole).copied().flatten().map(i32::from)
    }

    pub fn putts(&self, hole: usize) -> Option<i32> {
        self.putts.get(hole).copied().flatten().map(i32::from)
    }

    pub fn with_gross(mut self, hole: usize, value: Option<u8>) -> Self {
        if let Some(slot) = self.gross.get_mut(hole) {
            *slot = value;
        }
        self
    }

    pub fn with_putts(mut self, hole: usize, value: Option<u8>) -> Self {
        if let Some(slot) = self.putts.get_mut(hole) {
            *slot = value;
        }
        self
    }

    /// Number of holes with a gross entry.
    pub fn holes_played(&self) -> usize {
        self.gross.iter().filter(|g| g.is_some()).count()
    }
}

/// A single cell change on the score grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEdit {
    Gross {
        player: PlayerId,
        hole: usize,
        value: Option<u8>,
    },
    Putts {
        player: PlayerId,
        hole: usize,
        value: Option<u8>,
    },
}

/// The in-progress round: which tee each player plays and what they have scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, deserialize_with = "lenient_format_id")]
    pub game_format: FormatId,
    /// Round-specific tee overrides, keyed by player.
    #[serde(default)]
    pub player_tees: BTreeMap<PlayerId, TeeId>,
    #[serde(default)]
    pub scores: BTreeMap<PlayerId, ScoreSheet>,
}

impl Round {
    pub fn new(name: impl Into<String>, date: impl Into<String>, game_format: FormatId) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            game_format,
            player_tees: BTreeMap::new(),
            scores: BTreeMap::new(),
        }
    }

    /// Start the next round: same game format, no tee overrides, no scores.
    pub fn start_next(&self, name: impl Into<String>, date: impl Into<String>) -> Self {
        Self::new(name, date, self.game_format)
    }

    /// Return a new round with `edit` applied. The receiver is left untouched.
    pub fn apply(&self, edit: ScoreEdit) -> Self {
        let mut next = self.clone();
        match edit {
            ScoreEdit::Gross {
                player,
                hole,
                value,
            } => {
                let sheet = next.scores.remove(&player).unwrap_or_default();
                next.scores.insert(player, sheet.with_gross(hole, value));
            },
            ScoreEdit::Putts {
                player,
                hole,
                value,
            } => {
                let sheet = next.scores.remove(&player).unwrap_or_default();
                next.scores.insert(player, sheet.with_putts(hole, value));
            },
        }
        next
    }

    /// Return a new round with `player` assigned to `tee`.
    pub fn with_tee(&self, player: PlayerId, tee: impl Into<TeeId>) -> Self {
        let mut next = self.clone();
        next.player_tees.insert(player, tee.into());
        next
    }

    /// The tee id a player plays this round: the override, else their default.
    pub fn tee_for<'a>(&'a self, player: &'a Player) -> &'a str {
        self.player_tees
            .get(&player.id)
            .map(String::as_str)
            .unwrap_or(player.default_tee.as_str())
    }

    /// The player's sheet, or the shared empty sheet if nothing was entered.
    pub fn sheet(&self, player: PlayerId) -> &ScoreSheet {
        self.scores.get(&player).unwrap_or(&ScoreSheet::EMPTY)
    }
}

/// The roster and course library a round is played against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub roster: Vec<Player>,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Library {
    /// The active course, or the first course when none is flagged active.
    pub fn active_course(&self) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.active)
            .or_else(|| self.courses.first())
    }

    /// Active players in roster order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter().filter(|p| p.active)
    }
}
