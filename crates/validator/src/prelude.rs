//! Prelude module for convenient imports.
//!
//! ```rust
//! use terminex_validator::prelude::*;
//! ```

pub use crate::guard;
pub use crate::rules::RuleValidator;
pub use crate::{guard_in_range, guard_not_empty, guard_not_null, guard_that};

pub use terminex_core::Outcome;
pub use terminex_error::{Error, ErrorCode, Fault};
