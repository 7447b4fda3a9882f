use serde::{Deserialize, Serialize};

use crate::course::TeeId;

/// Unique identifier for a player on the roster.
pub type PlayerId = u64;

/// A roster member. Rounds reference players by id; they never own a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Handicap index, 0.0 to 54.0.
    pub handicap_index: f64,
    #[serde(default = "default_true")]
    pub active: bool,
    /// Tee played when the round carries no override for this player.
    pub default_tee: TeeId,
}

fn default_true() -> bool {
    true
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, handicap_index: f64, tee: &str) -> Self {
        Self {
            id,
            name: name.into(),
            handicap_index,
            active: true,
            default_tee: tee.to_string(),
        }
    }
}
