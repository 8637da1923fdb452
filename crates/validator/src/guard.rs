//! Argument guards
//!
//! Each guard checks one precondition and returns the checked input on
//! success, or a [`Fault`] naming the offending parameter. Faults are
//! programmer errors: surface them with `?`, do not recover from them.
//!
//! The `guard_*!` macros fill in the parameter name from the argument
//! expression.
//!
//! # Examples
//!
//! ```rust
//! use terminex_error::Fault;
//! use terminex_validator::guard;
//!
//! fn connect(host: Option<&str>, port: i32) -> Result<String, Fault> {
//!     let host = guard::not_null_or_empty(host, "host")?;
//!     let port = guard::in_range(port, 1, 65_535, "port")?;
//!     Ok(format!("{host}:{port}"))
//! }
//!
//! assert_eq!(connect(Some("localhost"), 8080).unwrap(), "localhost:8080");
//! assert_eq!(connect(Some(""), 8080).unwrap_err().parameter(), Some("host"));
//! assert!(connect(Some("localhost"), 0).unwrap_err().is_out_of_range());
//! ```

use std::borrow::Cow;

use terminex_error::Fault;

/// Rejects an absent value.
pub fn not_null<T: ?Sized>(
    input: Option<&T>,
    parameter: impl Into<Cow<'static, str>>,
) -> Result<&T, Fault> {
    input.ok_or_else(|| rejected(Fault::null_argument(parameter)))
}

/// Rejects an absent or empty string.
pub fn not_null_or_empty(
    input: Option<&str>,
    parameter: impl Into<Cow<'static, str>>,
) -> Result<&str, Fault> {
    match input {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(rejected(Fault::empty_argument(parameter))),
    }
}

/// Rejects an integer outside `from..=to`.
pub fn in_range<T>(
    input: T,
    from: T,
    to: T,
    parameter: impl Into<Cow<'static, str>>,
) -> Result<T, Fault>
where
    T: PartialOrd + Copy + Into<i64>,
{
    if input < from || input > to {
        return Err(rejected(Fault::out_of_range(parameter, input, from, to)));
    }
    Ok(input)
}

/// Rejects when `condition` is true, with a plain message.
pub fn that(condition: bool, message: impl Into<Cow<'static, str>>) -> Result<(), Fault> {
    if condition {
        return Err(rejected(Fault::invalid_argument(message)));
    }
    Ok(())
}

/// Rejects when `condition` is true, with an error built by `factory`.
///
/// Reserved for rare checks that no dedicated guard covers. `factory` is
/// only called on rejection.
pub fn that_with<E>(condition: bool, factory: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        tracing::debug!("guard rejected a custom condition");
        return Err(factory());
    }
    Ok(())
}

fn rejected(fault: Fault) -> Fault {
    tracing::debug!(
        parameter = fault.parameter().unwrap_or_default(),
        reason = %fault,
        "guard rejected argument"
    );
    fault
}
