//! Rule-list validation
//!
//! A [`RuleValidator`] collects `(is_invalid, message)` pairs through a fluent
//! builder and reports the messages of every rule that fires. Rules are
//! evaluated lazily, in insertion order, and never short-circuit.
//!
//! # Examples
//!
//! ```rust
//! use terminex_validator::RuleValidator;
//!
//! let name: Option<&str> = None;
//! let tags = vec!["a"];
//!
//! let failures = RuleValidator::new()
//!     .required(name, "name is required")
//!     .min_count(&tags, 2, "at least two tags")
//!     .add_rule(|| tags.len() > 10, "too many tags")
//!     .validate();
//!
//! assert_eq!(failures, ["name is required", "at least two tags"]);
//! ```

use std::borrow::Cow;
use std::fmt;

use terminex_core::Outcome;
use terminex_error::{Error, ErrorCode};

struct Rule<'a> {
    is_invalid: Box<dyn Fn() -> bool + 'a>,
    message: Cow<'static, str>,
}

/// Accumulates predicates and reports the ones that fire.
///
/// A predicate returning `true` means the checked state is invalid.
#[derive(Default)]
pub struct RuleValidator<'a> {
    rules: Vec<Rule<'a>>,
}

impl<'a> RuleValidator<'a> {
    /// Creates a validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule that fails when `is_invalid` returns `true`.
    #[must_use = "builder methods return a new validator"]
    pub fn add_rule(
        mut self,
        is_invalid: impl Fn() -> bool + 'a,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.rules.push(Rule {
            is_invalid: Box::new(is_invalid),
            message: message.into(),
        });
        self
    }

    /// Adds a rule that fails when `value` is absent.
    #[must_use = "builder methods return a new validator"]
    pub fn required<T: ?Sized>(
        self,
        value: Option<&'a T>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.add_rule(move || value.is_none(), message)
    }

    /// Adds a rule that fails when `items` holds fewer than `min` elements.
    #[must_use = "builder methods return a new validator"]
    pub fn min_count<T>(
        self,
        items: &'a [T],
        min: usize,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.add_rule(move || items.len() < min, message)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates every rule and returns the messages of the failing ones,
    /// in insertion order.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let failed: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| (rule.is_invalid)())
            .map(|rule| rule.message.to_string())
            .collect();

        tracing::debug!(
            rules = self.rules.len(),
            failed = failed.len(),
            "rule validation finished"
        );
        failed
    }

    /// Like [`validate`](Self::validate), wrapping each message in an
    /// [`Error`] with `code`.
    #[must_use]
    pub fn validate_errors(&self, code: &ErrorCode) -> Vec<Error> {
        self.validate()
            .into_iter()
            .map(|message| Error::new(code.clone(), message))
            .collect()
    }

    /// Evaluates every rule into an [`Outcome`].
    ///
    /// Succeeds when no rule fires, otherwise fails with one
    /// [`ErrorCode::VALIDATION`] error per failing rule.
    pub fn outcome(&self) -> Outcome {
        Outcome::combine(
            self.validate_errors(&ErrorCode::VALIDATION)
                .into_iter()
                .map(Outcome::failure),
        )
    }

    /// Consumes the validator, see [`outcome`](Self::outcome).
    pub fn into_outcome(self) -> Outcome {
        self.outcome()
    }
}

impl fmt::Debug for RuleValidator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleValidator")
            .field(
                "messages",
                &self.rules.iter().map(|rule| &rule.message).collect::<Vec<_>>(),
            )
            .finish()
    }
}
