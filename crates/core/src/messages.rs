//! Stable fault and rendering messages.
//!
//! Callers may match on these strings; changing one is a breaking change.

/// Reading the value of an absent [`Maybe`](crate::Maybe).
pub const NO_VALUE: &str = "no value present";

/// Reading the value of a failed [`Outcome`](crate::Outcome).
pub const VALUE_OF_FAILED: &str = "cannot get value from a failed result";

/// Building a failed outcome from an empty error sequence.
pub const FAILURE_WITHOUT_ERRORS: &str = "cannot create a failed result without errors";

/// Building a successful outcome that carries errors.
pub const SUCCESS_WITH_ERRORS: &str = "cannot create a successful result with errors";

/// Building a successful outcome without a value.
pub const SUCCESS_WITHOUT_VALUE: &str = "cannot create a successful result without a value";

/// Rendering of an outcome that carries no errors.
pub const NO_ERRORS: &str = "No errors.";

/// Header line preceding the numbered error list.
pub const ERRORS_HEADER: &str = "Errors:";
