//! Error handling for the toolkit
//!
//! This module defines the error object carried by failure outcomes.

mod conversions;
mod helpers;
mod serialization;
mod types;

pub use types::{BoxError, NON_STRING_PANIC_MESSAGE, OutcomeError, Result};
