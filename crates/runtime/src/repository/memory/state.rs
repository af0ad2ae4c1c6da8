//! In-memory LedgerRepository implementation for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::repository::error::validate_key;
use crate::repository::{LedgerRepository, RepositoryError, Result};

/// In-memory implementation of LedgerRepository.
///
/// Clones share the same storage, so a test can keep one clone to inspect
/// what a scoreboard wrote through another.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedgerRepo {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryLedgerRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a record already stored under `key`.
    pub fn with_record(key: impl Into<String>, record: impl Into<String>) -> Self {
        let mut records = HashMap::new();
        records.insert(key.into(), record.into());
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl LedgerRepository for InMemoryLedgerRepo {
    fn save(&self, key: &str, record: &str) -> Result<()> {
        validate_key(key)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(key.to_owned(), record.to_owned());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_previous_record() {
        let repo = InMemoryLedgerRepo::new();
        assert_eq!(repo.load("assets").unwrap(), None);

        repo.save("assets", "{\"gold\":1}").unwrap();
        repo.save("assets", "{\"gold\":2}").unwrap();
        assert_eq!(repo.load("assets").unwrap().as_deref(), Some("{\"gold\":2}"));
        assert!(repo.exists("assets"));
    }

    #[test]
    fn clones_share_storage() {
        let repo = InMemoryLedgerRepo::new();
        let observer = repo.clone();
        repo.save("assets", "{}").unwrap();
        assert!(observer.exists("assets"));

        observer.delete("assets").unwrap();
        assert!(!repo.exists("assets"));
        // deleting twice is fine
        repo.delete("assets").unwrap();
    }

    #[test]
    fn rejects_unsafe_keys() {
        let repo = InMemoryLedgerRepo::new();
        assert!(matches!(
            repo.save("../assets", "{}"),
            Err(RepositoryError::InvalidKey(_))
        ));
        assert!(repo.load("").is_err());
    }

    #[test]
    fn exists_validates_keys() {
        let repo = InMemoryLedgerRepo::with_record("../assets", "{}");
        assert!(!repo.exists("../assets"));
        assert!(!repo.exists(""));
    }
}
