//! Tracing subscriber setup for hosts embedding the scoreboard.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::api::{Result, ScoreboardError};
use crate::config::LoggingConfig;

/// File name inside the log directory.
pub const LOG_FILE_NAME: &str = "scoreboard.log";

/// Keeps the background log writer alive; drop it on shutdown to flush.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` directives are honoured on top of `config.level`. With
/// `log_to_file` the output goes to [`LOG_FILE_NAME`] in the configured log
/// directory, otherwise to stderr. Fails if a global subscriber is already
/// installed.
pub fn setup_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let env_filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(config.level.into());

    if !config.log_to_file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| ScoreboardError::Logging(e.to_string()))?;

        return Ok(LoggingGuard { _file_writer: None });
    }

    let log_dir = config.resolved_log_dir();
    std::fs::create_dir_all(&log_dir).map_err(|e| {
        ScoreboardError::Logging(format!("cannot create {}: {}", log_dir.display(), e))
    })?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| ScoreboardError::Logging(e.to_string()))?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(LoggingGuard {
        _file_writer: Some(guard),
    })
}
