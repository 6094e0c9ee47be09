//! System utilities
//!
//! This module provides extension traits over outcomes and options.

pub mod result;

// Re-export commonly used types and functions
pub use result::*;
