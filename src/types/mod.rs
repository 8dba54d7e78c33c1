//! Core error and outcome types.
//!
//! This module provides the immutable [`Error`] descriptor, its [`ErrorKind`]
//! classification, and the [`Outcome`] carrier that enforces the
//! success/failure mutual-exclusion invariant at construction time.
//!
//! # Examples
//!
//! ```
//! use simple_result::{Error, Outcome};
//!
//! let outcome: Outcome<u64> = Outcome::failure(Error::not_found(
//!     "User.NotFound",
//!     "No user matches the supplied id.",
//! ));
//!
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().code(), "User.NotFound");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod outcome;

pub use error::*;
pub use outcome::*;

use crate::types::alloc_type::String;

/// SmallVec-backed collection used for per-property validation messages.
///
/// Uses inline storage for up to 2 messages to avoid heap allocations in the
/// common case where a property fails one or two rules.
pub type MessageVec = SmallVec<[String; 2]>;
