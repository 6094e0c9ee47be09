//! Adapter configuration and the collapsing conversion

use crate::core::outcome::Outcome;
use crate::utils::error::OutcomeError;
use serde::{Deserialize, Serialize};

/// Adapter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Convert panics raised by the wrapped operation into failures
    pub catch_panics: bool,
    /// Emit tracing events when the operation settles as a failure
    pub log_failures: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            catch_panics: true,
            log_failures: true,
        }
    }
}

impl AdapterConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether panics are converted into failures
    pub fn catch_panics(mut self, enabled: bool) -> Self {
        self.catch_panics = enabled;
        self
    }

    /// Set whether failures are logged
    pub fn log_failures(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }
}

/// Values an adapted operation may settle with.
///
/// A plain `Result` is wrapped once. An `Outcome` is unwrapped through
/// [`Outcome::into_result`] and wrapped again, so an operation that already
/// returns an outcome never produces a nested one.
pub trait IntoOutcome {
    /// Success payload after collapsing
    type Value;

    /// Convert into a single-level outcome
    fn into_outcome(self) -> Outcome<Self::Value>;
}

impl<T, E> IntoOutcome for Result<T, E>
where
    E: Into<OutcomeError>,
{
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error.into()),
        }
    }
}

impl<T, E> IntoOutcome for Outcome<T, E>
where
    E: Into<OutcomeError>,
{
    type Value = T;

    fn into_outcome(self) -> Outcome<T> {
        self.into_result().into_outcome()
    }
}
