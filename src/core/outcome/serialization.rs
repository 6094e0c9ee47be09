//! Serialized form of Outcome
//!
//! An outcome is a record with a boolean `success` discriminant and exactly
//! one of `value` or `error`. Records whose discriminant disagrees with the
//! populated field are rejected.

use super::types::Outcome;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Outcome::Success(value) => {
                record.serialize_field("success", &true)?;
                record.serialize_field("value", value)?;
            }
            Outcome::Failure(error) => {
                record.serialize_field("success", &false)?;
                record.serialize_field("error", error)?;
            }
        }
        record.end()
    }
}

/// `success` flag that only accepts the expected boolean
struct Discriminant<const SUCCESS: bool>;

impl<'de, const SUCCESS: bool> Deserialize<'de> for Discriminant<SUCCESS> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? == SUCCESS {
            Ok(Discriminant)
        } else {
            Err(de::Error::custom(
                "`success` flag does not match the populated field",
            ))
        }
    }
}

/// Decodes a field without serde's missing-field fallback, so an absent
/// `value` is an error even when the payload is an `Option`
fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer)
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "T: Deserialize<'de>"))]
struct SuccessRecord<T> {
    #[serde(rename = "success")]
    _success: Discriminant<true>,
    #[serde(deserialize_with = "required")]
    value: T,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "E: Deserialize<'de>"))]
struct FailureRecord<E> {
    #[serde(rename = "success")]
    _success: Discriminant<false>,
    #[serde(deserialize_with = "required")]
    error: E,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OutcomeRecord<T, E> {
    Success(SuccessRecord<T>),
    Failure(FailureRecord<E>),
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OutcomeRecord::deserialize(deserializer)? {
            OutcomeRecord::Success(record) => Outcome::Success(record.value),
            OutcomeRecord::Failure(record) => Outcome::Failure(record.error),
        })
    }
}
