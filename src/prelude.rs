//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use simple_result::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`validation!`]
//! - **Types**: [`Error`], [`ErrorKind`], [`Outcome`], [`ValidationError`],
//!   [`PropertyError`], [`ProblemDetails`]
//!
//! # Examples
//!
//! ```
//! use simple_result::prelude::*;
//!
//! fn register(email: Option<&str>) -> Outcome<String> {
//!     match email {
//!         Some(email) if email.contains('@') => Outcome::success_with(email.to_owned()),
//!         Some(_) => validation!("User.Invalid", "Email" => ["InvalidFormat"]).into(),
//!         None => Outcome::from_value(None),
//!     }
//! }
//!
//! assert!(register(Some("a@b.c")).is_success());
//! assert_eq!(register(None).error(), &Error::NULL_VALUE);
//! ```

pub use crate::validation;

pub use crate::problem::ProblemDetails;
pub use crate::types::{Error, ErrorKind, MessageVec, Outcome};
pub use crate::validation::{PropertyError, PropertyVec, ValidationError};
