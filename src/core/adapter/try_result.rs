//! Bridge from raising async code into outcomes

use super::types::{AdapterConfig, IntoOutcome};
use crate::core::outcome::Outcome;
use crate::utils::error::{OutcomeError, Result};
use futures::FutureExt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Settled payload type of an operation returning `Fut`
pub type SettledValue<Fut> = <<Fut as Future>::Output as IntoOutcome>::Value;

/// Run `f` and convert whatever it settles with into an outcome.
///
/// Errors, including panics, become failures. This never returns an error of
/// its own; use [`try_or_raise`] to propagate instead.
pub async fn try_result<F, Fut>(f: F) -> Outcome<SettledValue<Fut>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    try_result_with(&AdapterConfig::default(), f).await
}

/// Run `f` and hand any error it settles with back through `Err` unchanged
pub async fn try_or_raise<F, Fut>(f: F) -> Result<SettledValue<Fut>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    try_or_raise_with(&AdapterConfig::default(), f).await
}

/// [`try_result`] with explicit configuration
pub async fn try_result_with<F, Fut>(config: &AdapterConfig, f: F) -> Outcome<SettledValue<Fut>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    let settled = settle(config, f).await;
    finish(config, settled.map(IntoOutcome::into_outcome))
}

/// [`try_or_raise`] with explicit configuration
pub async fn try_or_raise_with<F, Fut>(config: &AdapterConfig, f: F) -> Result<SettledValue<Fut>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    try_result_with(config, f).await.into_result()
}

/// Run an operation that settles with a plain value.
///
/// The value is wrapped as a success as-is; the only failure is a panic.
pub async fn try_value<F, Fut, T>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    try_value_with(&AdapterConfig::default(), f).await
}

/// [`try_value`] with explicit configuration
pub async fn try_value_with<F, Fut, T>(config: &AdapterConfig, f: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let settled = settle(config, f).await;
    finish(config, settled.map(Outcome::Success))
}

/// How the wrapped operation ended
enum Settled<T> {
    Completed(T),
    Panicked(OutcomeError),
}

impl<T> Settled<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Settled<U> {
        match self {
            Settled::Completed(output) => Settled::Completed(f(output)),
            Settled::Panicked(error) => Settled::Panicked(error),
        }
    }
}

async fn settle<F, Fut>(config: &AdapterConfig, f: F) -> Settled<Fut::Output>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    if !config.catch_panics {
        return Settled::Completed(f().await);
    }

    // `f` may panic before handing back a future
    let future = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(future) => future,
        Err(payload) => return Settled::Panicked(OutcomeError::from_panic(payload)),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(output) => Settled::Completed(output),
        Err(payload) => Settled::Panicked(OutcomeError::from_panic(payload)),
    }
}

// One event per failure: panics at warn, settled failures at debug
fn finish<T>(config: &AdapterConfig, settled: Settled<Outcome<T>>) -> Outcome<T> {
    match settled {
        Settled::Completed(outcome) => {
            if config.log_failures {
                if let Outcome::Failure(error) = &outcome {
                    debug!(error = %error, "Async operation settled as failure");
                }
            }
            outcome
        }
        Settled::Panicked(error) => {
            if config.log_failures {
                warn!(error = %error, "Caught panic in async operation");
            }
            Outcome::Failure(error)
        }
    }
}
