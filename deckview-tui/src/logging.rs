//! File logging — the terminal belongs to the presenter, so events go to a
//! log file through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use deckview_core::LoggingConfig;

const LOG_FILE: &str = "deckview.log";

/// Default log location: `<data_local_dir>/deckview/deckview.log`.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("deckview")
        .join(LOG_FILE)
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered events are flushed.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_owned())
        .unwrap_or_else(|| LOG_FILE.into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(guard)
}
