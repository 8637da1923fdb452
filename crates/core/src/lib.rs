//! # Terminex Core
//!
//! Monadic containers for explicit, exception-free error propagation.
//!
//! ## Key Components
//!
//! - **[`Maybe<T>`]**: an optional value with null-collapsing construction and
//!   `map` / `bind` combinators that short-circuit on absence.
//! - **[`Outcome<T>`]**: a success/failure container; a failure carries one or
//!   more [`Error`]s, a success carries none.
//! - **[`messages`]**: the stable fault and rendering strings.
//!
//! ## Usage
//!
//! ```rust
//! use terminex_core::prelude::*;
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { Maybe::some("alice") } else { Maybe::none() }
//! }
//!
//! let greeting = find_user(1)
//!     .ok_or_else(|| Error::not_found("user 1"))
//!     .map(|name| format!("hello, {name}"));
//! assert_eq!(greeting.value(), "hello, alice");
//!
//! let missing = find_user(2).ok_or_else(|| Error::not_found("user 2"));
//! assert!(missing.is_failure());
//! ```
//!
//! Reading the value of an absent `Maybe` or a failed `Outcome` is a
//! programmer error: `value()` panics, `try_value()` returns a [`Fault`].

pub mod maybe;
pub mod messages;
pub mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;

pub use terminex_error::{Error, ErrorCode, Fault};

/// Common prelude for Terminex crates
pub mod prelude {
    pub use super::{Error, ErrorCode, Fault, Maybe, Outcome};
}
