//! Error types for the toolkit

use std::sync::Arc;
use thiserror::Error;

/// Result type alias for the toolkit
pub type Result<T> = std::result::Result<T, OutcomeError>;

/// Boxed cause attached to an [`OutcomeError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Message used when a caught panic carried neither a `&str` nor a `String`
pub const NON_STRING_PANIC_MESSAGE: &str = "panic with non-string payload";

/// Shared representation behind an [`OutcomeError`]
#[derive(Error, Debug)]
#[error("{message}")]
pub(crate) struct ErrorRepr {
    pub(crate) message: String,
    #[source]
    pub(crate) cause: Option<BoxError>,
}

/// Error object carried by a failure outcome
///
/// The taxonomy is flat: an error is a message plus an optional cause.
/// Clones share one allocation, so the error a failure was built with is the
/// same error that comes back out of it. Equality is identity, see
/// [`OutcomeError::ptr_eq`].
#[derive(Error, Debug, Clone)]
#[error(transparent)]
pub struct OutcomeError {
    pub(crate) repr: Arc<ErrorRepr>,
}

impl PartialEq for OutcomeError {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for OutcomeError {}
