//! Helper functions for creating and inspecting errors

use super::types::{BoxError, ErrorRepr, NON_STRING_PANIC_MESSAGE, OutcomeError};
use std::any::Any;
use std::fmt::Display;
use std::sync::Arc;

impl OutcomeError {
    /// Create an error from a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::from_repr(message.into(), None)
    }

    /// Create an error with an underlying cause
    pub fn with_cause<S, C>(message: S, cause: C) -> Self
    where
        S: Into<String>,
        C: Into<BoxError>,
    {
        Self::from_repr(message.into(), Some(cause.into()))
    }

    /// Coerce an arbitrary value into an error using its string representation.
    ///
    /// Any structure beyond the rendered text is discarded.
    pub fn from_display<D: Display + ?Sized>(value: &D) -> Self {
        Self::new(value.to_string())
    }

    /// Wrap a structured error, keeping it as the cause
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::with_cause(message, error)
    }

    /// Build an error from a caught panic payload
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<String>() {
            Ok(message) => Self::new(*message),
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => Self::new(*message),
                None => Self::new(NON_STRING_PANIC_MESSAGE),
            },
        }
    }

    /// Wrap this error under a new message, keeping it as the cause
    pub fn context<S: Into<String>>(self, context: S) -> Self {
        let message = format!("{}: {}", context.into(), self.message());
        Self::with_cause(message, self)
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.repr.message
    }

    /// Underlying cause, if any
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.repr.cause.as_deref()
    }

    /// Whether two handles refer to the same error
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.repr, &other.repr)
    }

    fn from_repr(message: String, cause: Option<BoxError>) -> Self {
        Self {
            repr: Arc::new(ErrorRepr { message, cause }),
        }
    }
}
