//! A uniform Result/Error model for expected failure paths: operations return
//! an [`Outcome`] that is either a success (optionally carrying a value) or a
//! failure carrying a structured [`Error`], never an exception-style unwind.
//!
//! Expected domain failures travel as values; programming-contract violations
//! (empty error codes, failing with the no-error sentinel) panic at the point
//! of misuse. Each submodule re-exports its public surface from here, so
//! consumers can depend on `simple_result::*` or pick focused pieces.
//!
//! # Examples
//!
//! ## Basic Outcome
//!
//! ```
//! use simple_result::{Error, Outcome};
//!
//! fn find_user(id: u32) -> Outcome<&'static str> {
//!     if id == 1 {
//!         Outcome::success_with("alice")
//!     } else {
//!         Outcome::failure(Error::not_found("User.NotFound", "No user matches the supplied id."))
//!     }
//! }
//!
//! let greeting = find_user(1).match_with(
//!     |name| format!("hello, {name}"),
//!     |failed| format!("lookup failed: {}", failed.error().code()),
//! );
//! assert_eq!(greeting, "hello, alice");
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use simple_result::{Error, Outcome};
//!
//! let mut validation = Error::validation("User.Invalid");
//! validation.try_add_property_errors("Email", ["Required"]);
//! validation.try_add_property_errors("Age", ["MustBePositive"]);
//!
//! let outcome: Outcome<()> = validation.into();
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().validation_errors().unwrap().len(), 2);
//! ```
//!
//! ## Boundary Mapping
//!
//! ```
//! use simple_result::{validation, Outcome, ProblemDetails};
//!
//! let outcome: Outcome<()> =
//!     validation!("User.Invalid", "Email" => ["Required"]).into();
//! let problem = ProblemDetails::from_outcome(&outcome);
//!
//! assert_eq!(problem.status, 422);
//! assert_eq!(problem.title, "User.Invalid");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between errors, outcomes, and the standard `Result`
pub mod convert;
/// Declarative construction macro for validation errors
pub mod macros;
/// Problem-details rendering of failed outcomes for HTTP boundaries
pub mod problem;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error, ErrorKind, and Outcome core types
pub mod types;
/// Validation errors with per-property message accumulation
pub mod validation;

pub use problem::ProblemDetails;
pub use types::{Error, ErrorKind, MessageVec, Outcome};
pub use validation::{PropertyError, PropertyVec, ValidationError};
