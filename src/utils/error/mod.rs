//! Error handling utilities
//!
//! This module provides the error object carried by failure outcomes.

pub mod error;

// Re-export commonly used types and functions
pub use error::*;
