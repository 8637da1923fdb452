//! Programmer-error faults
//!
//! A [`Fault`] is raised when a caller breaks a contract: reading a value that
//! does not exist, building a result whose success flag disagrees with its
//! errors, minting a custom code outside its band, or passing a rejected
//! argument to a guard. Faults are never used for expected domain failures;
//! those travel as [`Error`](crate::Error) values.

#![allow(missing_docs)] // Enum variant fields are self-explanatory

use std::borrow::Cow;

use thiserror::Error;

/// Contract violation reported to the immediate caller.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// An operation was attempted in a state that does not allow it.
    #[error("{message}")]
    IllegalState { message: Cow<'static, str> },

    /// An integer argument fell outside an inclusive range.
    #[error("{parameter}: value {value} must be in the range {min}..={max}")]
    OutOfRange {
        parameter: Cow<'static, str>,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A required argument was absent.
    #[error("{parameter}: value must not be null")]
    NullArgument { parameter: Cow<'static, str> },

    /// A required string argument was absent or empty.
    #[error("{parameter}: string must not be null or empty")]
    EmptyArgument { parameter: Cow<'static, str> },

    /// A caller-defined precondition was violated.
    #[error("{message}")]
    InvalidArgument { message: Cow<'static, str> },
}

impl Fault {
    /// Create an illegal state fault
    pub fn illegal_state(message: impl Into<Cow<'static, str>>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    /// Create an out of range fault for `parameter`
    pub fn out_of_range(
        parameter: impl Into<Cow<'static, str>>,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::OutOfRange {
            parameter: parameter.into(),
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a null argument fault
    pub fn null_argument(parameter: impl Into<Cow<'static, str>>) -> Self {
        Self::NullArgument {
            parameter: parameter.into(),
        }
    }

    /// Create a null-or-empty string fault
    pub fn empty_argument(parameter: impl Into<Cow<'static, str>>) -> Self {
        Self::EmptyArgument {
            parameter: parameter.into(),
        }
    }

    /// Create an invalid argument fault with a plain message
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Name of the offending parameter, when the fault concerns one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::OutOfRange { parameter, .. }
            | Self::NullArgument { parameter }
            | Self::EmptyArgument { parameter } => Some(parameter.as_ref()),
            Self::IllegalState { .. } | Self::InvalidArgument { .. } => None,
        }
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
