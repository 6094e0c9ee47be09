//! Async adapter
//!
//! The sanctioned boundary for bringing error-raising async APIs (network
//! clients, third-party libraries) into the outcome model. Each call awaits
//! exactly one operation; there is no timeout, cancellation or retry.

mod try_result;
mod types;

pub use try_result::{
    SettledValue, try_or_raise, try_or_raise_with, try_result, try_result_with, try_value,
    try_value_with,
};
pub use types::{AdapterConfig, IntoOutcome};
