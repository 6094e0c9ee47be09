//! # outcome-rs
//!
//! Value-based error handling. A fallible computation returns an [`Outcome`],
//! either a success carrying a payload or a failure carrying an error, and
//! callers branch on it instead of unwinding.
//!
//! ## Features
//!
//! - **Outcome**: constructors, discriminators, `map`/`map_err` with
//!   railway-style short-circuiting, and a loud extraction path
//! - **Async adapter**: [`try_result`] converts an error-raising async
//!   operation into an outcome, collapsing operations that already return one
//! - **Assertions**: `ensure*` guards fail loudly, `check*` guards return outcomes
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome_rs::{Outcome, OutcomeError, failure, map, success, unwrap};
//!
//! fn halve(x: i32) -> Outcome<i32> {
//!     if x % 2 == 0 {
//!         success(x / 2)
//!     } else {
//!         failure(OutcomeError::new("odd input"))
//!     }
//! }
//!
//! let doubled = map(halve(10), |x| x * 2);
//! assert_eq!(unwrap(doubled), Ok(10));
//! assert!(halve(3).is_failure());
//! ```
//!
//! ## Adapting async code
//!
//! ```rust
//! use outcome_rs::{OutcomeError, try_result};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = try_result(|| async { Err::<u32, _>("upstream unavailable") }).await;
//! assert_eq!(outcome.error().map(OutcomeError::message), Some("upstream unavailable"));
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod core;
pub mod utils;

// Re-export main types
pub use utils::error::{OutcomeError, Result};

// Export the outcome surface
pub use core::outcome::{Outcome, failure, is_failure, is_success, map, map_err, success, unwrap};

// Export the async adapter
pub use core::adapter::{
    AdapterConfig, IntoOutcome, try_or_raise, try_or_raise_with, try_result, try_result_with,
    try_value, try_value_with,
};

// Export assertion helpers
pub use core::assertion::{
    check, check_not_nil, check_not_nil_with, check_or, ensure, ensure_not_nil,
    ensure_not_nil_with, ensure_or,
};

// Export extension traits
pub use utils::sys::{OptionExt, OutcomeExt};
