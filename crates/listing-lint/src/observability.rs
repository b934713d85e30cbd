//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr so stdout stays clean for reports and
//! JSON. When a log path or directory is configured, a JSONL copy of every
//! event is also written there through a non-blocking appender.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_PATH_ENV: &str = "LISTING_LINT_LOG_PATH";
const LOG_DIR_ENV: &str = "LISTING_LINT_LOG_DIR";
const LOG_FILE_NAME: &str = "listing-lint.jsonl";

/// Where (if anywhere) to write the JSONL log file.
#[derive(Debug, Default, Clone)]
pub struct ObservabilityConfig {
    /// Exact file to append to. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory to write `listing-lint.jsonl` into.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `LISTING_LINT_LOG_PATH` / `LISTING_LINT_LOG_DIR`, falling back to
    /// the configured log directory when the environment does not set one.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// Split the configured destination into a directory and a file name.
    fn log_file(&self) -> Option<(PathBuf, PathBuf)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path.file_name().map(PathBuf::from)?;
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), PathBuf::from(LOG_FILE_NAME)))
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` forces `error`, each `-v` raises
/// verbosity one step, and the configured level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Returns the appender guard when file logging is active; keep it alive
/// until exit so buffered events are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
