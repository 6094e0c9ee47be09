//! Core functionality for the toolkit
//!
//! This module contains the outcome type, the async adapter and the
//! assertion helpers.

pub mod adapter;
pub mod assertion;
pub mod outcome;
