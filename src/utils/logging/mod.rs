//! Logging utilities
//!
//! The toolkit only emits `tracing` events; installing a subscriber is left to
//! the application, with [`init_logger`] as a convenience.

mod logger;
mod types;

pub use logger::{init_logger, init_logger_with};
pub use types::{LogLevel, LoggerConfig};
