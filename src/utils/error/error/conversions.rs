//! Type conversions into OutcomeError

use super::types::{BoxError, OutcomeError};

// Plain values are coerced through their string representation
impl From<&str> for OutcomeError {
    fn from(message: &str) -> Self {
        OutcomeError::new(message)
    }
}

impl From<String> for OutcomeError {
    fn from(message: String) -> Self {
        OutcomeError::new(message)
    }
}

impl From<BoxError> for OutcomeError {
    fn from(err: BoxError) -> Self {
        let message = err.to_string();
        OutcomeError::with_cause(message, err)
    }
}

impl From<std::io::Error> for OutcomeError {
    fn from(err: std::io::Error) -> Self {
        OutcomeError::from_error(err)
    }
}

impl From<serde_json::Error> for OutcomeError {
    fn from(err: serde_json::Error) -> Self {
        OutcomeError::from_error(err)
    }
}

impl From<anyhow::Error> for OutcomeError {
    fn from(err: anyhow::Error) -> Self {
        let message = err.to_string();
        OutcomeError::with_cause(message, BoxError::from(err))
    }
}

// A panicked task keeps its panic message, a cancelled one keeps the JoinError
impl From<tokio::task::JoinError> for OutcomeError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            OutcomeError::from_panic(err.into_panic())
        } else {
            OutcomeError::from_error(err)
        }
    }
}
