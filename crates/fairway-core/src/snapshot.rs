use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::round::{Library, Round};
use crate::validate::validate_snapshot;

/// Everything a persistence layer stores for a round: the library it was
/// played against and the round itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub library: Library,
    pub round: Round,
}

#[derive(Debug)]
pub enum SnapshotError {
    SerializeError(String),
    DeserializeError(String),
    Invalid(ValidationError),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerializeError(e) => write!(f, "serialize error: {e}"),
            Self::DeserializeError(e) => write!(f, "deserialize error: {e}"),
            Self::Invalid(e) => write!(f, "invalid snapshot: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for SnapshotError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

impl RoundSnapshot {
    pub fn new(library: Library, round: Round) -> Self {
        Self { library, round }
    }

    /// Check the snapshot against the data-entry rules.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        validate_snapshot(&self.library, &self.round)?;
        Ok(())
    }
}

/// Encode a snapshot as JSON text.
pub fn encode_json(snapshot: &RoundSnapshot) -> Result<String, SnapshotError> {
    serde_json::to_string(snapshot).map_err(|e| SnapshotError::SerializeError(e.to_string()))
}

/// Decode a snapshot from JSON text. Absent holes stay absent.
pub fn decode_json(data: &str) -> Result<RoundSnapshot, SnapshotError> {
    serde_json::from_str(data).map_err(|e| SnapshotError::DeserializeError(e.to_string()))
}

/// Encode a snapshot as MessagePack.
pub fn encode_binary(snapshot: &RoundSnapshot) -> Result<Vec<u8>, SnapshotError> {
    rmp_serde::to_vec_named(snapshot).map_err(|e| SnapshotError::SerializeError(e.to_string()))
}

/// Decode a snapshot from MessagePack.
pub fn decode_binary(data: &[u8]) -> Result<RoundSnapshot, SnapshotError> {
    rmp_serde::from_slice(data).map_err(|e| SnapshotError::DeserializeError(e.to_string()))
}
