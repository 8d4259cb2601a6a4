//! Logging system initialization
//!
//! Sets up the global tracing subscriber from [`LoggingConfig`].

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use super::panic_handler::RunMode;
use crate::config::LoggingConfig;
use crate::errors::{ClientError, Result};

const DEFAULT_LOG_NAME: &str = "tinyurl.log";

/// Initialize logging system based on configuration
///
/// Output goes to `logging.file` when set (daily rotation unless disabled).
/// Without a file, CLI mode logs to stderr and TUI mode discards log output,
/// since the terminal belongs to the interface.
///
/// `RUST_LOG` takes precedence over `logging.level`.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, mode: RunMode) -> Result<WorkerGuard> {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match (log_file, mode) {
        (Some(file), _) if config.enable_rotation => {
            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let filename = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(DEFAULT_LOG_NAME);
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| ClientError::config(format!("log file {}: {}", file, e)))?;
            Box::new(appender)
        }
        (Some(file), _) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)?;
            Box::new(file)
        }
        (None, RunMode::Tui) => Box::new(std::io::sink()),
        (None, RunMode::Cli) => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_target(false)
        .with_ansi(log_file.is_none());

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| ClientError::config(format!("logging already initialized: {}", e)))?;

    Ok(guard)
}
