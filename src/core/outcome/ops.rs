//! Free-function surface over [`Outcome`]

use super::types::Outcome;

/// Wrap a value as a success. Any value is a valid payload, falsy ones included.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wrap an error as a failure, verbatim
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

pub fn is_success<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_success()
}

pub fn is_failure<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_failure()
}

/// Extract the payload or hand back the failure's error through `Err`.
///
/// Callers that must not propagate should branch on [`is_success`] first.
pub fn unwrap<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

pub fn map<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

pub fn map_err<T, E, E2, F>(outcome: Outcome<T, E>, f: F) -> Outcome<T, E2>
where
    F: FnOnce(E) -> E2,
{
    outcome.map_err(f)
}
