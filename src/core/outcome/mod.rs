//! Success/failure outcome type
//!
//! [`Outcome`] models a fallible computation as a value. The free functions in
//! this module mirror the inherent methods for call sites that read better
//! as `map(outcome, f)` than `outcome.map(f)`.

mod conversions;
mod ops;
mod serialization;
mod types;

pub use ops::{failure, is_failure, is_success, map, map_err, success, unwrap};
pub use types::Outcome;
