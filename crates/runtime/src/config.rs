//! Scoreboard configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use ledger_core::LedgerConfig;

use crate::gateway::DEFAULT_STORAGE_KEY;

/// Configuration required to open a scoreboard session.
#[derive(Clone, Debug)]
pub struct ScoreboardConfig {
    /// Key the ledger record is stored under.
    pub storage_key: String,
    /// Directory for the record file; platform data dir when `None`.
    pub data_dir: Option<PathBuf>,
    /// Keep the ledger on disk between sessions (default: true).
    ///
    /// When disabled the session uses an in-memory repository.
    pub enable_persistence: bool,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            data_dir: None,
            enable_persistence: true,
            ledger: LedgerConfig::STANDARD,
            logging: LoggingConfig::default(),
        }
    }
}

impl ScoreboardConfig {
    /// Reads a `.env` file if present, then the process environment.
    pub fn load() -> Self {
        // Missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_STORAGE_KEY` - Record key (default: `assets`)
    /// - `SCOREBOARD_DATA_DIR` - Directory for the record file (default: platform-specific)
    /// - `SCOREBOARD_PERSISTENCE` - Persist between sessions (default: true)
    /// - `SCOREBOARD_LOG_DIR` - Directory for log files (default: platform-specific)
    /// - `SCOREBOARD_LOG_TO_FILE` - Log to a file instead of stderr (default: false)
    /// - `SCOREBOARD_LOG_LEVEL` - Baseline log level (default: info)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = env::var("SCOREBOARD_STORAGE_KEY")
            && !key.trim().is_empty()
        {
            config.storage_key = key.trim().to_owned();
        }

        config.data_dir = env::var("SCOREBOARD_DATA_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("SCOREBOARD_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        config.logging.log_dir = env::var("SCOREBOARD_LOG_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("SCOREBOARD_LOG_TO_FILE") {
            config.logging.log_to_file = enable;
        } else if env::var("SCOREBOARD_LOG_TO_FILE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.logging.log_to_file = true;
        }

        if let Some(level) = read_env::<tracing::Level>("SCOREBOARD_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }

    /// Directory the record file lives in.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub log_to_file: bool,
    pub log_dir: Option<PathBuf>,
    pub level: tracing::Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_to_file: false,
            log_dir: None,
            level: tracing::Level::INFO,
        }
    }
}

impl LoggingConfig {
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}

/// Platform data directory, e.g. `~/.local/share/scoreboard` on Linux.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "scoreboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/scoreboard/data"))
}

/// Platform cache directory for logs, e.g. `~/.cache/scoreboard/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "scoreboard")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/scoreboard/logs"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScoreboardConfig::default();
        assert_eq!(config.storage_key, "assets");
        assert!(config.enable_persistence);
        assert!(config.data_dir.is_none());
        assert_eq!(config.ledger, LedgerConfig::STANDARD);
        assert!(!config.logging.log_to_file);
        assert_eq!(config.logging.level, tracing::Level::INFO);
    }

    #[test]
    fn explicit_dirs_win() {
        let config = ScoreboardConfig {
            data_dir: Some(PathBuf::from("/srv/board")),
            ..ScoreboardConfig::default()
        };
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/srv/board"));
    }

    #[test]
    fn default_dirs_follow_project_dirs() {
        match directories::ProjectDirs::from("", "", "scoreboard") {
            Some(dirs) => {
                assert_eq!(default_data_dir(), dirs.data_dir());
                assert_eq!(default_log_dir(), dirs.cache_dir().join("logs"));
            }
            None => {
                assert_eq!(default_data_dir(), PathBuf::from("/tmp/scoreboard/data"));
                assert_eq!(default_log_dir(), PathBuf::from("/tmp/scoreboard/logs"));
            }
        }
    }
}
