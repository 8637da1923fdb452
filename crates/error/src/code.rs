//! Error code identities
//!
//! An [`ErrorCode`] classifies the kind of an [`Error`](crate::Error)
//! independently of its message. The built-in catalog is a closed set of
//! associated constants occupying the low range; callers that need their own
//! codes mint them through [`ErrorCode::custom`], which only accepts values in
//! the reserved custom band.

use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;

use crate::fault::Fault;

/// A stable `(name, code)` identity.
///
/// Equality is structural: two codes are equal when both the name and the
/// numeric code are equal.
///
/// # Examples
///
/// ```
/// use terminex_error::ErrorCode;
///
/// assert_eq!(ErrorCode::NOT_FOUND.name(), "NotFound");
///
/// let code = ErrorCode::custom("QuotaExceeded", 15_000).unwrap();
/// assert!(code.is_custom());
/// assert!(ErrorCode::custom("QuotaExceeded", 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode {
    name: Cow<'static, str>,
    code: i32,
}

// ============================================================================
// BUILT-IN CATALOG
// ============================================================================

impl ErrorCode {
    /// No specific classification.
    pub const NONE: Self = Self::entry("None", 0);
    /// A required value was null.
    pub const NULL: Self = Self::entry("Null", 1);
    /// A required value was empty.
    pub const EMPTY: Self = Self::entry("Empty", 2);

    /// The entity already exists.
    pub const EXIST: Self = Self::entry("Exist", 3);
    /// The entity does not exist.
    pub const NOT_EXIST: Self = Self::entry("NotExist", 4);
    /// Malformed request payload.
    pub const INVALID_REQUEST: Self = Self::entry("InvalidRequest", 5);
    /// The entity could not be found.
    pub const NOT_FOUND: Self = Self::entry("NotFound", 6);
    /// A collaborator answered with something unusable.
    pub const INVALID_RESPONSE: Self = Self::entry("InvalidResponse", 7);

    /// Creating an entity failed.
    pub const CREATE: Self = Self::entry("Create", 8);
    /// Updating an entity failed.
    pub const UPDATE: Self = Self::entry("Update", 9);
    /// Deleting an entity failed.
    pub const DELETE: Self = Self::entry("Delete", 10);
    /// Persisting changes failed.
    pub const SAVE: Self = Self::entry("Save", 11);
    /// The change conflicts with the current state.
    pub const CONFLICT: Self = Self::entry("Conflict", 12);
    /// A connection could not be established or was lost.
    pub const CONNECTION: Self = Self::entry("Connection", 13);
    /// Unclassified server-side failure.
    pub const SERVER: Self = Self::entry("Server", 14);

    /// Incorrect syntax or wrong request parameters.
    pub const BAD_REQUEST: Self = Self::entry("BadRequest", 15);
    /// Input failed validation.
    pub const VALIDATION: Self = Self::entry("Validation", 16);

    /// Authentication failed: wrong credentials, expired or invalid token.
    pub const UNAUTHORIZED: Self = Self::entry("Unauthorized", 17);
    /// Authenticated, but not allowed to access the resource.
    pub const FORBIDDEN: Self = Self::entry("Forbidden", 18);

    /// Lowest code accepted by [`ErrorCode::custom`].
    pub const CUSTOM_MIN: i32 = 10_000;
    /// Highest code accepted by [`ErrorCode::custom`].
    pub const CUSTOM_MAX: i32 = 29_999;
    /// The reserved custom band, inclusive on both ends.
    pub const CUSTOM_RANGE: RangeInclusive<i32> = Self::CUSTOM_MIN..=Self::CUSTOM_MAX;

    const fn entry(name: &'static str, code: i32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            code,
        }
    }
}

static CATALOG: [ErrorCode; 19] = [
    ErrorCode::NONE,
    ErrorCode::NULL,
    ErrorCode::EMPTY,
    ErrorCode::EXIST,
    ErrorCode::NOT_EXIST,
    ErrorCode::INVALID_REQUEST,
    ErrorCode::NOT_FOUND,
    ErrorCode::INVALID_RESPONSE,
    ErrorCode::CREATE,
    ErrorCode::UPDATE,
    ErrorCode::DELETE,
    ErrorCode::SAVE,
    ErrorCode::CONFLICT,
    ErrorCode::CONNECTION,
    ErrorCode::SERVER,
    ErrorCode::BAD_REQUEST,
    ErrorCode::VALIDATION,
    ErrorCode::UNAUTHORIZED,
    ErrorCode::FORBIDDEN,
];

impl ErrorCode {
    /// Mint a custom code.
    ///
    /// `code` must lie in [`ErrorCode::CUSTOM_RANGE`]; anything else is an
    /// [`Fault::OutOfRange`] naming the `code` parameter. Custom codes are not
    /// deduplicated: every call returns a fresh value.
    pub fn custom(name: impl Into<Cow<'static, str>>, code: i32) -> Result<Self, Fault> {
        if !Self::CUSTOM_RANGE.contains(&code) {
            tracing::warn!(
                code,
                min = Self::CUSTOM_MIN,
                max = Self::CUSTOM_MAX,
                "rejected custom error code outside the reserved band"
            );
            return Err(Fault::out_of_range(
                "code",
                code,
                Self::CUSTOM_MIN,
                Self::CUSTOM_MAX,
            ));
        }

        Ok(Self {
            name: name.into(),
            code,
        })
    }

    /// Every built-in entry, in declaration order.
    pub fn catalog() -> &'static [ErrorCode] {
        &CATALOG
    }

    /// Look up a built-in entry by name.
    pub fn builtin(name: &str) -> Option<Self> {
        CATALOG.iter().find(|entry| entry.name == name).cloned()
    }

    /// Look up a built-in entry by numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        CATALOG.iter().find(|entry| entry.code == code).cloned()
    }

    /// Human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric code.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Whether the numeric code lies in the custom band.
    pub fn is_custom(&self) -> bool {
        Self::CUSTOM_RANGE.contains(&self.code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.name.into_owned()
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code
    }
}

impl From<&ErrorCode> for i32 {
    fn from(code: &ErrorCode) -> Self {
        code.code
    }
}
