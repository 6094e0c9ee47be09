use super::types::{LogLevel, LoggerConfig};
use crate::utils::error::{OutcomeError, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber at `level`.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logger(level: LogLevel) -> Result<()> {
    init_logger_with(&LoggerConfig { level, json: false })
}

/// Install a global `fmt` subscriber from `config`.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_logger_with(config: &LoggerConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| OutcomeError::with_cause("Failed to install tracing subscriber", e))
}
