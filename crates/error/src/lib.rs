//! # Terminex Error
//!
//! Error identities shared by every Terminex crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use terminex_error::prelude::*;
//!
//! let error = Error::validation("email is required");
//! assert_eq!(error.code().code(), ErrorCode::VALIDATION.code());
//!
//! let quota = ErrorCode::custom("QuotaExceeded", 10_500)?;
//! let error = Error::new(quota, "daily limit reached");
//! assert_eq!(error.code().name(), "QuotaExceeded");
//! # Ok::<(), Fault>(())
//! ```
//!
//! ## Two failure channels
//!
//! - [`Error`]: an expected domain failure. Travels inside an outcome and is
//!   never raised.
//! - [`Fault`]: a programmer error: a broken invariant or a rejected
//!   argument. Returned to the immediate caller, never recovered internally.

pub mod code;
pub mod error;
pub mod fault;

pub use code::ErrorCode;
pub use error::Error;
pub use fault::Fault;

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::{Error, ErrorCode, Fault};
}
