//! Assertion helpers
//!
//! Each guard comes in two forms. The `ensure*` functions fail loudly, handing
//! the error back through `Err` so `?` propagates it. The `check*` functions
//! are total and return an [`Outcome`](crate::core::outcome::Outcome) instead.
//! Only `None` counts as nil: `Some(0)`, `Some(false)` and `Some("")` pass.

mod guards;

pub use guards::{
    DEFAULT_ASSERTION_MESSAGE, DEFAULT_NOT_NIL_MESSAGE, check, check_not_nil,
    check_not_nil_with, check_or, ensure, ensure_not_nil, ensure_not_nil_with, ensure_or,
};
