use thiserror::Error;

use crate::game::SessionPhase;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid grid {rows}x{columns}: cell count must be even and positive")]
    InvalidGrid { rows: usize, columns: usize },

    #[error("Card catalog is empty")]
    EmptyCatalog,

    #[error("Score store IO error: {0}")]
    StoreIo(#[from] std::io::Error),

    #[error("Malformed score line: {reason}")]
    MalformedScoreLine { reason: String },

    #[error("Invalid score entry: {0}")]
    InvalidScoreEntry(String),

    #[error("Invalid session phase: expected {expected}, got {actual}")]
    InvalidPhase {
        expected: SessionPhase,
        actual: SessionPhase,
    },

    #[error("Two-player mode needs a name for each player")]
    MissingPlayer,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The score file does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::StoreIo(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedScoreLine {
            reason: reason.into(),
        }
    }
}
