//! The unit of failure information carried by an outcome

use std::borrow::Cow;
use std::fmt;

use crate::code::ErrorCode;

/// An [`ErrorCode`] paired with a free-text message.
///
/// The message may be empty. Errors have no identity beyond structural
/// equality.
///
/// # Examples
///
/// ```
/// use terminex_error::{Error, ErrorCode};
///
/// let error = Error::not_found("user 42");
/// assert_eq!(error.code(), &ErrorCode::NOT_FOUND);
/// assert_eq!(error.to_string(), "NotFound: user 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    code: ErrorCode,
    message: Cow<'static, str>,
}

impl Error {
    /// Creates an error from a code and a message.
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates an error with an empty message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: Cow::Borrowed(""),
        }
    }

    /// Classification of this error.
    #[inline]
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Free-text reason; may be empty.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Splits the error back into its code and message.
    pub fn into_parts(self) -> (ErrorCode, Cow<'static, str>) {
        (self.code, self.message)
    }
}

macro_rules! shorthand_constructors {
    ($($(#[$meta:meta])* $name:ident => $code:ident;)*) => {
        impl Error {
            $(
                $(#[$meta])*
                pub fn $name(message: impl Into<Cow<'static, str>>) -> Self {
                    Self::new(ErrorCode::$code, message)
                }
            )*
        }
    };
}

shorthand_constructors! {
    /// [`ErrorCode::NULL`] error.
    null => NULL;
    /// [`ErrorCode::EMPTY`] error.
    empty => EMPTY;
    /// [`ErrorCode::EXIST`] error.
    exist => EXIST;
    /// [`ErrorCode::NOT_EXIST`] error.
    not_exist => NOT_EXIST;
    /// [`ErrorCode::NOT_FOUND`] error.
    not_found => NOT_FOUND;
    /// [`ErrorCode::INVALID_REQUEST`] error.
    invalid_request => INVALID_REQUEST;
    /// [`ErrorCode::INVALID_RESPONSE`] error.
    invalid_response => INVALID_RESPONSE;
    /// [`ErrorCode::CREATE`] error.
    create => CREATE;
    /// [`ErrorCode::UPDATE`] error.
    update => UPDATE;
    /// [`ErrorCode::DELETE`] error.
    delete => DELETE;
    /// [`ErrorCode::SAVE`] error.
    save => SAVE;
    /// [`ErrorCode::CONFLICT`] error.
    conflict => CONFLICT;
    /// [`ErrorCode::CONNECTION`] error.
    connection => CONNECTION;
    /// [`ErrorCode::SERVER`] error.
    server => SERVER;
    /// [`ErrorCode::BAD_REQUEST`] error.
    bad_request => BAD_REQUEST;
    /// [`ErrorCode::VALIDATION`] error.
    validation => VALIDATION;
    /// [`ErrorCode::UNAUTHORIZED`] error.
    unauthorized => UNAUTHORIZED;
    /// [`ErrorCode::FORBIDDEN`] error.
    forbidden => FORBIDDEN;
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}
