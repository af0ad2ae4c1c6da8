//! Unified error types surfaced by the scoreboard API.
//!
//! Wraps ledger validation failures, repository setup failures and logging
//! setup so callers can bubble them up with consistent context.

use thiserror::Error;

pub use crate::repository::RepositoryError;
pub use ledger_core::LedgerError;

pub type Result<T> = std::result::Result<T, ScoreboardError>;

#[derive(Debug, Error)]
pub enum ScoreboardError {
    /// Caller input rejected by the ledger; the ledger is unchanged.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Storage could not be prepared while building the scoreboard.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to parse command: {0}")]
    CommandSyntax(#[source] serde_json::Error),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl ScoreboardError {
    /// The ledger error, if this is a validation failure.
    pub fn as_ledger(&self) -> Option<&LedgerError> {
        match self {
            Self::Ledger(err) => Some(err),
            _ => None,
        }
    }
}
