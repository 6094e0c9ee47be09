//! Utility modules for the toolkit
//!
//! ## Module Organization
//!
//! - **error**: The error object carried by failures, with conversions
//! - **logging**: Tracing subscriber setup
//! - **sys**: Extension traits for logged fallbacks

pub mod error;
pub mod logging;
pub mod sys;

// Re-export commonly used types from each module for convenience
pub use error::{OutcomeError, Result};
pub use logging::{LogLevel, LoggerConfig, init_logger};
pub use sys::{OptionExt, OutcomeExt};
