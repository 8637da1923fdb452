//! Guard macros that capture the parameter name from the argument expression.
//!
//! # Available Macros
//!
//! - [`guard_not_null!`]: `Option<T>` must be `Some`
//! - [`guard_not_empty!`]: optional string must be present and non-empty
//! - [`guard_in_range!`]: integer must lie in an inclusive range
//! - [`guard_that!`]: caller-defined rejection condition
//!
//! Every macro expands to a `Result<_, Fault>` expression; apply `?` to
//! surface the fault.
//!
//! # Examples
//!
//! ```rust
//! use terminex_error::Fault;
//! use terminex_validator::{guard_in_range, guard_not_empty, guard_not_null};
//!
//! fn register(name: Option<String>, age: i32, team: Option<u32>) -> Result<(), Fault> {
//!     guard_not_empty!(name)?;
//!     guard_in_range!(age, 18, 120)?;
//!     guard_not_null!(team)?;
//!     Ok(())
//! }
//!
//! let fault = register(Some("bob".into()), 12, Some(1)).unwrap_err();
//! assert_eq!(fault.parameter(), Some("age"));
//! ```

/// Rejects a `None` option, naming the argument expression.
#[macro_export]
macro_rules! guard_not_null {
    ($input:expr) => {
        $crate::guard::not_null(::core::option::Option::as_ref(&$input), stringify!($input))
    };
}

/// Rejects an absent or empty string, naming the argument expression.
///
/// Accepts `Option<String>` and `Option<&str>`.
#[macro_export]
macro_rules! guard_not_empty {
    ($input:expr) => {
        $crate::guard::not_null_or_empty(
            ::core::option::Option::as_deref(&$input),
            stringify!($input),
        )
    };
}

/// Rejects an integer outside `from..=to`, naming the argument expression.
#[macro_export]
macro_rules! guard_in_range {
    ($input:expr, $from:expr, $to:expr) => {
        $crate::guard::in_range($input, $from, $to, stringify!($input))
    };
}

/// Rejects when the condition holds.
///
/// With a message, fails with an invalid argument fault; with
/// `else => factory`, fails with whatever the factory builds.
#[macro_export]
macro_rules! guard_that {
    ($condition:expr, else => $factory:expr) => {
        $crate::guard::that_with($condition, $factory)
    };
    ($condition:expr, $message:expr) => {
        $crate::guard::that($condition, $message)
    };
}
