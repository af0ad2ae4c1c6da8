//! Best-effort persistence of the ledger record.
//!
//! The in-memory ledger is authoritative; storage only has to catch up. Every
//! gateway method therefore logs storage failures instead of returning them,
//! and the next successful [`PersistenceGateway::persist`] reconciles.

use ledger_core::AssetLedger;

use crate::repository::{LedgerRepository, Result};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "assets";

/// Moves the ledger record between the session and a [`LedgerRepository`].
///
/// Holds no state besides the repository and key: each persist is a full
/// overwrite, each load a fresh read.
pub struct PersistenceGateway {
    repository: Box<dyn LedgerRepository>,
    storage_key: String,
}

impl PersistenceGateway {
    pub fn new(repository: impl LedgerRepository + 'static, storage_key: impl Into<String>) -> Self {
        Self::from_boxed(Box::new(repository), storage_key)
    }

    pub fn from_boxed(
        repository: Box<dyn LedgerRepository>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Overwrites the stored record with `ledger`.
    ///
    /// Returns whether the write succeeded; failures are logged.
    pub fn persist(&self, ledger: &AssetLedger) -> bool {
        match self.try_persist(ledger) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to persist ledger under {:?}: {}",
                    self.storage_key,
                    e
                );
                false
            }
        }
    }

    /// Reads the stored record, treating read failures as absence.
    pub fn load_persisted(&self) -> Option<String> {
        match self.repository.load(&self.storage_key) {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                tracing::debug!("No stored record under {:?}", self.storage_key);
                None
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read stored record under {:?}: {}",
                    self.storage_key,
                    e
                );
                None
            }
        }
    }

    /// Removes the stored record.
    pub fn discard(&self) -> bool {
        match self.repository.delete(&self.storage_key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to discard stored record under {:?}: {}",
                    self.storage_key,
                    e
                );
                false
            }
        }
    }

    fn try_persist(&self, ledger: &AssetLedger) -> Result<()> {
        self.repository.save(&self.storage_key, &ledger.to_record())?;
        tracing::debug!("Persisted ledger under {:?}", self.storage_key);
        Ok(())
    }
}
