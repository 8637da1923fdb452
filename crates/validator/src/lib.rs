//! # terminex-validator
//!
//! Argument guards and rule-list validation.
//!
//! ## Guards
//!
//! The [`guard`] functions check one precondition each and fail fast with a
//! [`Fault`](terminex_error::Fault) naming the offending parameter. The
//! `guard_*!` macros capture that name from the argument expression:
//!
//! ```rust
//! use terminex_error::Fault;
//! use terminex_validator::prelude::*;
//!
//! fn page(size: i32) -> Result<i32, Fault> {
//!     guard_in_range!(size, 1, 100)
//! }
//!
//! assert_eq!(page(20), Ok(20));
//! assert_eq!(
//!     page(0).unwrap_err().to_string(),
//!     "size: value 0 must be in the range 1..=100"
//! );
//! ```
//!
//! ## Rules
//!
//! A [`RuleValidator`] accumulates lazy `(is_invalid, message)` pairs and
//! reports every rule that fires, either as plain messages or as a
//! Validation-coded [`Outcome`](terminex_core::Outcome):
//!
//! ```rust
//! use terminex_validator::prelude::*;
//!
//! let members: Vec<u32> = Vec::new();
//! let outcome = RuleValidator::new()
//!     .min_count(&members, 1, "a team needs a member")
//!     .into_outcome();
//!
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.errors()[0].code(), &ErrorCode::VALIDATION);
//! ```

pub mod guard;
mod macros;
pub mod prelude;
pub mod rules;

pub use rules::RuleValidator;
