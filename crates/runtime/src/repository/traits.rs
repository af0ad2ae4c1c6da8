//! Repository contract for the persisted ledger record.

use super::error::Result;

/// Durable storage for serialized ledger records.
///
/// Each key holds one record and every save replaces the previous content
/// wholesale. Implementations store the text verbatim; decoding belongs to
/// the ledger.
pub trait LedgerRepository {
    /// Replace the record stored under `key`.
    fn save(&self, key: &str, record: &str) -> Result<()>;

    /// Read the record under `key`, or `None` if nothing was stored.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Remove the record under `key`. Removing a missing record succeeds.
    fn delete(&self, key: &str) -> Result<()>;

    /// Check if a record exists
    fn exists(&self, key: &str) -> bool {
        matches!(self.load(key), Ok(Some(_)))
    }
}

impl<R: LedgerRepository + ?Sized> LedgerRepository for Box<R> {
    fn save(&self, key: &str, record: &str) -> Result<()> {
        (**self).save(key, record)
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }
}
