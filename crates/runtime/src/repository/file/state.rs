//! File-based LedgerRepository implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::repository::error::validate_key;
use crate::repository::{LedgerRepository, RepositoryError, Result};

/// File-based implementation of LedgerRepository.
///
/// # File Format
///
/// Each key is stored as `{key}.json` under the base directory, holding the
/// record text exactly as the ledger encoded it. Writes go to a temp file
/// first and are renamed into place, so a crash mid-write leaves the previous
/// record intact.
#[derive(Debug, Clone)]
pub struct FileLedgerRepository {
    base_dir: PathBuf,
}

impl FileLedgerRepository {
    /// Create a new file-based repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a record file.
    fn record_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl LedgerRepository for FileLedgerRepository {
    fn save(&self, key: &str, record: &str) -> Result<()> {
        let path = self.record_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, record).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved record[{}] to {}", key, path.display());

        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key)?;

        match fs::read_to_string(&path) {
            Ok(record) => {
                tracing::debug!("Loaded record[{}] from {}", key, path.display());
                Ok(Some(record))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Deleted record[{}]", key);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }

    fn exists(&self, key: &str) -> bool {
        self.record_path(key).map(|path| path.exists()).unwrap_or(false)
    }
}
