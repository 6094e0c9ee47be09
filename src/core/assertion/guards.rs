//! Boolean and presence guards

use crate::core::outcome::Outcome;
use crate::utils::error::{OutcomeError, Result};
use tracing::debug;

/// Message of the error built by [`ensure`] and [`check`]
pub const DEFAULT_ASSERTION_MESSAGE: &str = "Assertion failed";

/// Message of the error built by [`ensure_not_nil`] and [`check_not_nil`]
pub const DEFAULT_NOT_NIL_MESSAGE: &str = "Expected value to be non-null";

// ==================== Raising guards ====================

/// Fail with the default assertion error unless `condition` holds
pub fn ensure(condition: bool) -> Result<bool> {
    check(condition).into_result()
}

/// Fail with `error` unless `condition` holds
pub fn ensure_or<E>(condition: bool, error: E) -> std::result::Result<bool, E> {
    check_or(condition, error).into_result()
}

/// Return the contained value, failing with the default message on `None`
pub fn ensure_not_nil<T>(value: Option<T>) -> Result<T> {
    check_not_nil(value).into_result()
}

/// Return the contained value, failing with `message` on `None`
pub fn ensure_not_nil_with<T, S>(value: Option<T>, message: S) -> Result<T>
where
    S: Into<String>,
{
    check_not_nil_with(value, message).into_result()
}

// ==================== Total guards ====================

/// Outcome form of [`ensure`]
pub fn check(condition: bool) -> Outcome<bool> {
    if condition {
        return Outcome::Success(true);
    }
    debug!("{}", DEFAULT_ASSERTION_MESSAGE);
    Outcome::Failure(OutcomeError::new(DEFAULT_ASSERTION_MESSAGE))
}

/// Outcome form of [`ensure_or`]. The error is stored verbatim.
pub fn check_or<E>(condition: bool, error: E) -> Outcome<bool, E> {
    if condition {
        Outcome::Success(true)
    } else {
        Outcome::Failure(error)
    }
}

/// Outcome form of [`ensure_not_nil`]
pub fn check_not_nil<T>(value: Option<T>) -> Outcome<T> {
    check_not_nil_with(value, DEFAULT_NOT_NIL_MESSAGE)
}

/// Outcome form of [`ensure_not_nil_with`]
pub fn check_not_nil_with<T, S>(value: Option<T>, message: S) -> Outcome<T>
where
    S: Into<String>,
{
    match value {
        Some(value) => Outcome::Success(value),
        None => {
            let error = OutcomeError::new(message);
            debug!(error = %error, "Missing required value");
            Outcome::Failure(error)
        }
    }
}
