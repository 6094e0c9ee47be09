//! Outcome extension utilities
//!
//! This module provides extension traits that log a failure and carry on,
//! for call sites where a failed outcome is not worth propagating.

use crate::core::outcome::Outcome;
use crate::utils::error::OutcomeError;
use std::fmt::Display;
use tracing::{error, warn};

/// Extension trait for Outcome types to provide logged fallbacks
pub trait OutcomeExt<T, E> {
    /// Log a failure and return a default value
    fn unwrap_or_log_default(self, context: &str) -> T
    where
        T: Default;

    /// Log a failure and return the provided default value
    fn unwrap_or_log(self, default: T, context: &str) -> T;

    /// Wrap a failure's error under `context`, keeping the original as cause
    fn with_context(self, context: &str) -> Outcome<T>;

    /// Log a failure and continue without a value
    fn log_and_continue(self, context: &str) -> Option<T>;
}

impl<T, E> OutcomeExt<T, E> for Outcome<T, E>
where
    E: Display + Into<OutcomeError>,
{
    fn unwrap_or_log_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(e) => {
                error!("Error in {}: {}. Using default value.", context, e);
                T::default()
            }
        }
    }

    fn unwrap_or_log(self, default: T, context: &str) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(e) => {
                error!("Error in {}: {}. Using fallback value.", context, e);
                default
            }
        }
    }

    fn with_context(self, context: &str) -> Outcome<T> {
        self.map_err(|e| e.into().context(context))
    }

    fn log_and_continue(self, context: &str) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(e) => {
                warn!("Non-fatal error in {}: {}. Continuing...", context, e);
                None
            }
        }
    }
}

/// Extension trait for Option types
pub trait OptionExt<T> {
    /// Convert None to a failure carrying `message`
    fn ok_or_message(self, message: &str) -> Outcome<T>;

    /// Log when None and return default
    fn unwrap_or_log_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_message(self, message: &str) -> Outcome<T> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(OutcomeError::new(message)),
        }
    }

    fn unwrap_or_log_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Some(value) => value,
            None => {
                warn!("Missing value in {}, using default", context);
                T::default()
            }
        }
    }
}
