//! Optional values
//!
//! [`Maybe<T>`] holds zero or one value and offers explicit combinators in
//! place of null checks. The nullable domain in Rust is `Option<T>`: building
//! a `Maybe` from `None` (through [`Maybe::from_nullable`] or `From`) always
//! yields [`Maybe::none`], so a present-but-null state cannot be created that
//! way.
//!
//! # Examples
//!
//! ```rust
//! use terminex_core::Maybe;
//!
//! let port = Maybe::some("8080")
//!     .map_nullable(|raw| raw.parse::<u16>().ok())
//!     .map(|port| port + 1);
//! assert_eq!(port, Maybe::some(8081));
//!
//! let missing: Maybe<u16> = Maybe::from_nullable(None);
//! assert_eq!(missing.to_string(), "None");
//! ```

use std::fmt;

use terminex_error::Fault;

use crate::messages;

/// An optional value with null-collapsing construction.
///
/// Compared structurally: `None == None`, `Some(x) == Some(y)` iff `x == y`,
/// and `Some(_) != None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Maybe<T> {
    inner: Option<T>,
}

impl<T> Maybe<T> {
    /// The empty instance.
    #[inline]
    pub const fn none() -> Self {
        Self { inner: None }
    }

    /// Wraps a value.
    ///
    /// `Some(0)` and `Some("")` are present: only absence collapses, never a
    /// zero or empty value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Wraps a nullable value; `None` collapses to [`Maybe::none`].
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        Self { inner: value }
    }

    /// Whether a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.inner.is_some()
    }

    /// Whether the value is absent.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics with [`messages::NO_VALUE`] when the value is absent. Use
    /// [`Maybe::try_value`] to get a [`Fault`] instead.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.inner {
            Some(value) => value,
            None => no_value(),
        }
    }

    /// Returns the wrapped value, or an illegal state fault when absent.
    pub fn try_value(&self) -> Result<&T, Fault> {
        self.inner
            .as_ref()
            .ok_or_else(|| Fault::illegal_state(messages::NO_VALUE))
    }

    /// Consumes the container and returns the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics with [`messages::NO_VALUE`] when the value is absent.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.inner {
            Some(value) => value,
            None => no_value(),
        }
    }

    /// Returns the wrapped value, or `default` when absent.
    pub fn value_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Returns the wrapped value, or `T::default()` when absent.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// Invokes exactly one branch and returns its result.
    pub fn match_with<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
        match self.inner {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Side-effecting twin of [`Maybe::match_with`].
    pub fn switch(&self, on_some: impl FnOnce(&T), on_none: impl FnOnce()) {
        match &self.inner {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Applies `f` to a present value. `f` is not called when absent.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        Maybe {
            inner: self.inner.map(f),
        }
    }

    /// Like [`Maybe::map`], but `f` may return null (`None`), which collapses
    /// the result to [`Maybe::none`].
    pub fn map_nullable<U>(self, f: impl FnOnce(T) -> Option<U>) -> Maybe<U> {
        Maybe {
            inner: self.inner.and_then(f),
        }
    }

    /// Chains a computation that itself may produce nothing.
    ///
    /// An absent value short-circuits: `f` is not called and the result is
    /// [`Maybe::none`].
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self.inner {
            Some(value) => f(value),
            None => Maybe::none(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        Self {
            inner: self.inner.filter(predicate),
        }
    }

    /// Returns `self` when present, otherwise the result of `f`.
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        if self.has_value() { self } else { f() }
    }

    /// Borrows the wrapped value.
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            inner: self.inner.as_ref(),
        }
    }

    /// Converts back into the standard library option.
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

#[cold]
#[track_caller]
fn no_value() -> ! {
    tracing::error!("{}", messages::NO_VALUE);
    panic!("{}", messages::NO_VALUE)
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.inner
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => write!(f, "Some({value})"),
            None => f.write_str("None"),
        }
    }
}
