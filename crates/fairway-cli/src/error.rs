use std::path::PathBuf;

use fairway_core::FieldError;
use fairway_core::snapshot::SnapshotError;

/// Failures at the binary boundary. Engines never fail; everything here is
/// about getting a snapshot in and a report out.
#[derive(Debug)]
pub enum CliError {
    Io { path: PathBuf, source: std::io::Error },
    Config(String),
    Snapshot(SnapshotError),
    Field(FieldError),
    Output(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Config(m) => write!(f, "configuration error: {m}"),
            Self::Snapshot(e) => write!(f, "{e}"),
            Self::Field(e) => write!(f, "cannot settle round: {e}"),
            Self::Output(m) => write!(f, "output error: {m}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Snapshot(e) => Some(e),
            Self::Field(e) => Some(e),
            Self::Config(_) | Self::Output(_) => None,
        }
    }
}

impl From<SnapshotError> for CliError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

impl From<FieldError> for CliError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}
