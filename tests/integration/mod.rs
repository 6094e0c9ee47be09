//! Integration tests for outcome-rs
//!
//! These tests use only the public API.

pub mod adapter_tests;
pub mod assertion_tests;
