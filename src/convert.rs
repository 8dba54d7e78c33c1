//! Conversions between [`Error`], [`ValidationError`], [`Outcome`], and the
//! standard `Result`.
//!
//! These adapters are the explicit Rust rendering of what would otherwise be
//! implicit conversions: a raw error converts into a failed outcome, a frozen
//! validation accumulator converts into its error form, and standard results
//! bridge both ways. Value conversion stays a named constructor
//! ([`Outcome::from_value`]) so the absent-value-maps-to-`NULL_VALUE` rule is
//! visible at the call site.
//!
//! # Examples
//!
//! ```
//! use simple_result::{Error, Outcome};
//!
//! let outcome: Outcome<i32> =
//!     Error::conflict("User.EmailTaken", "The email address is already in use.").into();
//! assert!(outcome.is_failure());
//!
//! let bridged: Outcome<i32> = Ok::<_, Error>(5).into();
//! assert_eq!(bridged.value(), Some(&5));
//! ```

use crate::types::{Error, Outcome};
use crate::validation::ValidationError;

impl From<ValidationError> for Error {
    /// Freezes the accumulator: no further contributions are possible once
    /// the validation error has taken its place inside an [`Error`].
    #[inline]
    fn from(validation: ValidationError) -> Self {
        Error::Validation(validation)
    }
}

impl<T> From<Error> for Outcome<T> {
    /// A raw error is always a failure.
    ///
    /// # Panics
    ///
    /// Panics if `error` is the [`Error::NONE`] sentinel, same as
    /// [`Outcome::failure`].
    #[inline]
    fn from(error: Error) -> Self {
        Outcome::failure(error)
    }
}

impl<T> From<ValidationError> for Outcome<T> {
    /// Freezes the accumulator and wraps it as a failed outcome in one step.
    #[inline]
    fn from(validation: ValidationError) -> Self {
        Outcome::failure(Error::from(validation))
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    /// Bridges from the standard vocabulary; the inverse of
    /// [`Outcome::into_result`].
    ///
    /// # Panics
    ///
    /// Panics if the `Err` side carries the [`Error::NONE`] sentinel.
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Outcome::success_with(value),
            Err(error) => Outcome::failure(error),
        }
    }
}
