//! Serialized form of OutcomeError

use super::types::OutcomeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct ErrorRecord {
    message: String,
    #[serde(default)]
    cause: Option<String>,
}

impl Serialize for OutcomeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ErrorRecord {
            message: self.message().to_string(),
            cause: self.cause().map(|cause| cause.to_string()),
        }
        .serialize(serializer)
    }
}

// The cause comes back as a plain message error; its original type is not recoverable
impl<'de> Deserialize<'de> for OutcomeError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = ErrorRecord::deserialize(deserializer)?;
        Ok(match record.cause {
            Some(cause) => OutcomeError::with_cause(record.message, OutcomeError::new(cause)),
            None => OutcomeError::new(record.message),
        })
    }
}
