use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::config::{AppConfig, LogRotation};

const LOG_FILE_PREFIX: &str = "tokengen";
const LOG_FILE_SUFFIX: &str = "log";

// Flushes the file writer on drop, so it lives for the whole process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// `RUST_LOG` when set, otherwise the configured level.
fn env_filter(default_directive: &str) -> Result<EnvFilter, String> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directive).map_err(|error| {
            format!("Invalid log level {:?}: {}", default_directive, error)
        }),
    }
}

fn file_appender(log_dir: &Path, log_rotation: LogRotation) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(rotation(log_rotation))
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)
        .map_err(|error| format!("Failed to open log file in {:?}: {}", log_dir, error))
}

/// Initialize console and rolling file output from the application config.
///
/// Calling this again after a successful initialization does nothing.
pub fn init_logger(config: &AppConfig) -> Result<(), String> {
    if FILE_GUARD.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&config.log_dir).map_err(|error| {
        format!("Failed to create log directory {:?}: {}", config.log_dir, error)
    })?;

    let filter = env_filter(&config.log_level)?;
    let appender = file_appender(&config.log_dir, config.log_rotation)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true),
        )
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true),
        )
        .try_init()
        .map_err(|error| format!("Failed to set global subscriber: {}", error))?;

    let _ = FILE_GUARD.set(guard);
    tracing::debug!(
        "Logger initialized: dir={:?}, level={}, rotation={:?}",
        config.log_dir,
        config.log_level,
        config.log_rotation
    );

    Ok(())
}

/// Log a debug message
pub fn debug(message: &str) {
    tracing::debug!("{}", message);
}

/// Log a warning message
pub fn warn(message: &str) {
    tracing::warn!("{}", message);
}
