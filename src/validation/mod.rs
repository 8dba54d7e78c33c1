//! Validation errors that accumulate per-property messages.
//!
//! A [`ValidationError`] starts life as an empty, mutable accumulator created
//! by [`Error::validation`](crate::Error::validation). One or more
//! contributions add `(property name, messages)` entries; converting the
//! accumulator into an [`Error`](crate::Error) or a failed
//! [`Outcome`](crate::Outcome) freezes it, making the no-mutation-after-return
//! convention structural rather than documented.
//!
//! # Key Components
//!
//! - [`ValidationError`] - The accumulator, code plus ordered property entries
//! - [`PropertyError`] - A single `(name, messages)` contribution
//!
//! # Examples
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
pub mod core;

pub use self::core::*;
