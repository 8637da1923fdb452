//! Success/failure container built on zero or more [`Error`]s
//!
//! [`Outcome`] without a type argument is the untyped form: it only tells
//! success from failure. [`Outcome<T>`] additionally carries a value when
//! successful.
//!
//! Construction is the only place invariants are checked, and the internal
//! representation keeps them from being broken afterwards:
//!
//! 1. a success carries no errors;
//! 2. a failure carries at least one error;
//! 3. a success always carries its value. The nullable value domain is
//!    `Option<T>`, so `Outcome::<Option<String>>::success(None)` is a valid
//!    success whose value is `None`.
//!
//! # Examples
//!
//! ```rust
//! use terminex_core::Outcome;
//! use terminex_error::Error;
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     match raw.parse() {
//!         Ok(age) => Outcome::success(age),
//!         Err(_) => Outcome::failure(Error::validation(format!("'{raw}' is not an age"))),
//!     }
//! }
//!
//! assert_eq!(parse_age("42").value(), &42);
//! assert_eq!(
//!     parse_age("x").string_message(),
//!     "Errors:\n1) Code: 16 - Validation. Reason: 'x' is not an age\n"
//! );
//! ```

use std::fmt::{self, Write as _};

use terminex_error::{Error, Fault};

use crate::maybe::Maybe;
use crate::messages;

/// Either a success (carrying a `T`) or a failure (carrying one or more
/// errors, in insertion order).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an outcome may carry errors that should be handled"]
pub struct Outcome<T = ()> {
    state: State<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    // Never empty.
    Failure(Vec<Error>),
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<T> Outcome<T> {
    /// A successful outcome carrying `value`.
    pub fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// A failed outcome carrying a single error.
    pub fn failure(error: Error) -> Self {
        Self {
            state: State::Failure(vec![error]),
        }
    }

    /// A failed outcome carrying `errors`, in order.
    ///
    /// An empty sequence is an illegal state fault.
    pub fn failures(errors: impl IntoIterator<Item = Error>) -> Result<Self, Fault> {
        let errors: Vec<Error> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(violation(messages::FAILURE_WITHOUT_ERRORS));
        }
        Ok(Self {
            state: State::Failure(errors),
        })
    }

    /// Builds an outcome from a success flag, an optional value and errors,
    /// rejecting every combination that breaks an invariant.
    ///
    /// The value is ignored for failures.
    pub fn from_parts(
        is_success: bool,
        value: Option<T>,
        errors: Vec<Error>,
    ) -> Result<Self, Fault> {
        match (is_success, value) {
            (true, _) if !errors.is_empty() => Err(violation(messages::SUCCESS_WITH_ERRORS)),
            (true, None) => Err(violation(messages::SUCCESS_WITHOUT_VALUE)),
            (true, Some(value)) => Ok(Self::success(value)),
            (false, _) => Self::failures(errors),
        }
    }
}

impl Outcome {
    /// A successful outcome carrying no value.
    pub fn unit() -> Self {
        Self::success(())
    }

    /// Folds many untyped outcomes into one.
    ///
    /// The result is a success when every input succeeded, otherwise a
    /// failure carrying all errors in input order.
    pub fn combine(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let errors: Vec<Error> = outcomes.into_iter().flat_map(Outcome::into_errors).collect();
        if errors.is_empty() {
            Self::unit()
        } else {
            Self {
                state: State::Failure(errors),
            }
        }
    }
}

#[cold]
fn violation(message: &'static str) -> Fault {
    tracing::warn!(reason = message, "rejected outcome construction");
    Fault::illegal_state(message)
}

#[cold]
#[track_caller]
fn value_of_failed() -> ! {
    tracing::error!("{}", messages::VALUE_OF_FAILED);
    panic!("{}", messages::VALUE_OF_FAILED)
}

// ============================================================================
// ACCESSORS
// ============================================================================

impl<T> Outcome<T> {
    /// Whether this is a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Whether this is a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The errors of a failure; empty for a success.
    pub fn errors(&self) -> &[Error] {
        match &self.state {
            State::Success(_) => &[],
            State::Failure(errors) => errors,
        }
    }

    /// Consumes the outcome, keeping only its errors.
    pub fn into_errors(self) -> Vec<Error> {
        match self.state {
            State::Success(_) => Vec::new(),
            State::Failure(errors) => errors,
        }
    }

    /// Returns the value of a success.
    ///
    /// # Panics
    ///
    /// Panics with [`messages::VALUE_OF_FAILED`] on a failure. Use
    /// [`Outcome::try_value`] to get a [`Fault`] instead.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(_) => value_of_failed(),
        }
    }

    /// Returns the value of a success, or an illegal state fault.
    pub fn try_value(&self) -> Result<&T, Fault> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(_) => Err(Fault::illegal_state(messages::VALUE_OF_FAILED)),
        }
    }

    /// Consumes a success and returns its value.
    ///
    /// # Panics
    ///
    /// Panics with [`messages::VALUE_OF_FAILED`] on a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => value_of_failed(),
        }
    }

    /// Converts into a standard library result.
    pub fn into_result(self) -> Result<T, Vec<Error>> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(errors) => Err(errors),
        }
    }
}

// ============================================================================
// COMBINATORS
// ============================================================================

impl<T> Outcome<T> {
    /// Invokes exactly one branch: `on_success` with the value, or
    /// `on_failure` with the full error sequence.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Vec<Error>) -> R,
    ) -> R {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(errors) => on_failure(errors),
        }
    }

    /// Side-effecting twin of [`Outcome::match_with`].
    pub fn switch(&self, on_success: impl FnOnce(&T), on_failure: impl FnOnce(&[Error])) {
        match &self.state {
            State::Success(value) => on_success(value),
            State::Failure(errors) => on_failure(errors),
        }
    }

    /// Transforms the value of a success; failures pass through and `f` is
    /// not called.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(errors) => Outcome {
                state: State::Failure(errors),
            },
        }
    }

    /// Chains a computation that may itself fail; failures pass through and
    /// `f` is not called.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(errors) => Outcome {
                state: State::Failure(errors),
            },
        }
    }
}

impl<T> Maybe<T> {
    /// Converts into an outcome, using `error` when the value is absent.
    ///
    /// ```rust
    /// use terminex_core::{Maybe, Outcome};
    /// use terminex_error::{Error, ErrorCode};
    ///
    /// let user: Outcome<&str> = Maybe::none().ok_or_else(|| Error::not_found("user 7"));
    /// assert_eq!(user.errors()[0].code(), &ErrorCode::NOT_FOUND);
    /// ```
    pub fn ok_or_else(self, error: impl FnOnce() -> Error) -> Outcome<T> {
        self.match_with(Outcome::success, || Outcome::failure(error()))
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl<T> Outcome<T> {
    /// Renders the errors as a numbered list.
    ///
    /// `"No errors."` when there are none, otherwise a header line followed
    /// by one line per error, each terminated by a newline:
    ///
    /// ```text
    /// Errors:
    /// 1) Code: 6 - NotFound. Reason: A
    /// 2) Code: 16 - Validation. Reason: B
    /// ```
    pub fn string_message(&self) -> String {
        let mut out = String::new();
        let _ = self.render(&mut out, |out, error| {
            write!(
                out,
                "Code: {} - {}. Reason: {}",
                error.code().code(),
                error.code().name(),
                error.message()
            )
        });
        out
    }

    fn render<W: fmt::Write>(
        &self,
        out: &mut W,
        line: impl Fn(&mut W, &Error) -> fmt::Result,
    ) -> fmt::Result {
        let errors = self.errors();
        if errors.is_empty() {
            return out.write_str(messages::NO_ERRORS);
        }

        out.write_str(messages::ERRORS_HEADER)?;
        out.write_char('\n')?;
        for (index, error) in errors.iter().enumerate() {
            write!(out, "{}) ", index + 1)?;
            line(out, error)?;
            out.write_char('\n')?;
        }
        Ok(())
    }
}

/// Same numbered layout as [`Outcome::string_message`], with the success
/// flag and the numeric code on every line:
///
/// ```text
/// Errors:
/// 1) Status: [false] Code: [NotFound - 6] Info: [A]
/// ```
impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let is_success = self.is_success();
        self.render(f, |f, error| {
            write!(
                f,
                "Status: [{is_success}] Code: [{} - {}] Info: [{}]",
                error.code().name(),
                error.code().code(),
                error.message()
            )
        })
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl Default for Outcome {
    fn default() -> Self {
        Self::unit()
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> TryFrom<Vec<Error>> for Outcome<T> {
    type Error = Fault;

    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::failures(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use terminex_error::ErrorCode;

    #[test]
    fn test_unit_success() {
        let outcome = Outcome::unit();
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert!(outcome.errors().is_empty());
        assert_eq!(Outcome::default(), outcome);
    }

    #[test]
    fn test_failure_with_single_error() {
        let error = Error::not_found("object not found");
        let outcome: Outcome = Outcome::failure(error.clone());

        assert!(outcome.is_failure());
        assert_eq!(outcome.errors(), &[error]);
    }

    #[test]
    fn test_failures_keep_order_and_duplicates() {
        let errors = vec![
            Error::validation("first"),
            Error::validation("second"),
            Error::validation("first"),
        ];
        let outcome: Outcome = Outcome::failures(errors.clone()).unwrap();

        assert_eq!(outcome.errors(), errors.as_slice());
    }

    #[test]
    fn test_failures_reject_empty_sequence() {
        let fault = Outcome::<()>::failures(Vec::new()).unwrap_err();
        assert!(fault.is_illegal_state());
        assert_eq!(fault.to_string(), messages::FAILURE_WITHOUT_ERRORS);
    }

    #[test]
    fn test_from_parts_enforces_invariants() {
        let success_with_errors =
            Outcome::from_parts(true, Some(1), vec![Error::server("boom")]).unwrap_err();
        assert_eq!(success_with_errors.to_string(), messages::SUCCESS_WITH_ERRORS);

        let success_without_value = Outcome::<i32>::from_parts(true, None, Vec::new()).unwrap_err();
        assert_eq!(
            success_without_value.to_string(),
            messages::SUCCESS_WITHOUT_VALUE
        );

        let failure_without_errors =
            Outcome::<i32>::from_parts(false, None, Vec::new()).unwrap_err();
        assert_eq!(
            failure_without_errors.to_string(),
            messages::FAILURE_WITHOUT_ERRORS
        );

        let success = Outcome::from_parts(true, Some(5), Vec::new()).unwrap();
        assert_eq!(success.into_value(), 5);

        let failure = Outcome::from_parts(false, Some(5), vec![Error::server("boom")]).unwrap();
        assert!(failure.is_failure());
    }

    #[test]
    fn test_typed_value() {
        assert_eq!(Outcome::success(5).value(), &5);
        assert_eq!(Outcome::success("data").into_value(), "data");
    }

    #[test]
    #[should_panic(expected = "cannot get value from a failed result")]
    fn test_value_of_failure_panics() {
        let outcome = Outcome::<i32>::failure(Error::new(ErrorCode::NONE, "x"));
        let _ = outcome.value();
    }

    #[test]
    fn test_try_value_of_failure() {
        let outcome = Outcome::<i32>::failure(Error::not_found("x"));
        let fault = outcome.try_value().unwrap_err();
        assert!(fault.is_illegal_state());
        assert_eq!(fault.to_string(), "cannot get value from a failed result");
    }

    #[test]
    fn test_nullable_success() {
        let outcome = Outcome::<Option<String>>::success(None);
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &None);
    }

    #[test]
    fn test_match_with_invokes_one_branch() {
        let failures = Cell::new(0);
        let doubled = Outcome::success(42).match_with(
            |value| value * 2,
            |_| {
                failures.set(failures.get() + 1);
                -1
            },
        );
        assert_eq!(doubled, 84);
        assert_eq!(failures.get(), 0);

        let successes = Cell::new(0);
        let label = Outcome::<()>::failure(Error::null("missing")).match_with(
            |()| {
                successes.set(successes.get() + 1);
                "Ok"
            },
            |errors| if errors.is_empty() { "?" } else { "Fail" },
        );
        assert_eq!(label, "Fail");
        assert_eq!(successes.get(), 0);
    }

    #[test]
    fn test_switch_invokes_one_branch() {
        let mut executed = false;
        Outcome::<String>::failure(Error::validation("invalid")).switch(
            |_| unreachable!(),
            |errors| executed = !errors.is_empty(),
        );
        assert!(executed);

        let mut seen = 0;
        Outcome::success(7).switch(|value| seen = *value, |_| unreachable!());
        assert_eq!(seen, 7);
    }

    #[test]
    fn test_map_and_bind_propagate_failures() {
        let called = Cell::new(false);
        let failed = Outcome::<i32>::failure(Error::conflict("taken")).map(|x| {
            called.set(true);
            x + 1
        });
        assert!(!called.get());
        assert_eq!(failed.errors(), &[Error::conflict("taken")]);

        let chained = Outcome::success(2).map(|x| x * 10).bind(|x| {
            if x > 10 {
                Outcome::success(x)
            } else {
                Outcome::failure(Error::bad_request("small"))
            }
        });
        assert_eq!(chained.into_value(), 20);
    }

    #[test]
    fn test_combine() {
        let combined = Outcome::combine([
            Outcome::unit(),
            Outcome::failure(Error::validation("a")),
            Outcome::unit(),
            Outcome::failure(Error::validation("b")),
        ]);
        assert_eq!(
            combined.errors(),
            &[Error::validation("a"), Error::validation("b")]
        );
        assert!(Outcome::combine([Outcome::unit(), Outcome::unit()]).is_success());
        assert!(Outcome::combine(Vec::new()).is_success());
    }

    #[test]
    fn test_conversions() {
        let from_error: Outcome<u8> = Error::empty("blank").into();
        assert!(from_error.is_failure());

        let from_ok: Outcome<u8> = Ok::<u8, Error>(3).into();
        assert_eq!(from_ok.clone().into_result(), Ok(3));

        let from_vec = Outcome::<u8>::try_from(vec![Error::save("disk full")]).unwrap();
        assert_eq!(from_vec.into_result(), Err(vec![Error::save("disk full")]));
        assert!(Outcome::<u8>::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_maybe_bridge() {
        let found = Maybe::some(1).ok_or_else(|| Error::not_found("id 1"));
        assert_eq!(found.into_value(), 1);

        let missing = Maybe::<i32>::none().ok_or_else(|| Error::not_found("id 2"));
        assert_eq!(missing.errors(), &[Error::not_found("id 2")]);
    }

    #[test]
    fn test_string_message() {
        assert_eq!(Outcome::unit().string_message(), "No errors.");

        let outcome: Outcome =
            Outcome::failures([Error::not_found("A"), Error::validation("B")]).unwrap();
        assert_eq!(
            outcome.string_message(),
            "Errors:\n1) Code: 6 - NotFound. Reason: A\n2) Code: 16 - Validation. Reason: B\n"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::success(1).to_string(), "No errors.");

        let outcome = Outcome::<f64>::failure(Error::not_found("missing"));
        assert_eq!(
            outcome.to_string(),
            "Errors:\n1) Status: [false] Code: [NotFound - 6] Info: [missing]\n"
        );
    }
}
