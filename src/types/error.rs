use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::alloc_type::Cow;
use crate::validation::{PropertyError, ValidationError};

/// Closed classification of an [`Error`], used by boundary layers to pick an
/// external representation (for example an HTTP status code).
///
/// `None` is reserved for the canonical no-error sentinels; no factory ever
/// produces a `None`-tagged error of its own.
///
/// # Examples
///
/// ```
/// use simple_result::{Error, ErrorKind};
///
/// let error = Error::conflict("Order.Duplicate", "The order already exists.");
/// assert_eq!(error.kind(), ErrorKind::Conflict);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ErrorKind {
    None,
    Problem,
    NotFound,
    Conflict,
    Validation,
    Unknown,
}

/// An immutable failure descriptor: a `(code, description, kind)` triple.
///
/// `Error` is a tagged union over two shapes: a plain descriptor, and a
/// [`ValidationError`] that additionally carries per-property messages. Both
/// expose the common accessors [`code`](Error::code),
/// [`description`](Error::description) and [`kind`](Error::kind); the
/// property map is reachable only through
/// [`validation_errors`](Error::validation_errors).
///
/// Instances are created through the per-kind factories and never mutated
/// afterwards. They are freely shareable and safe for unsynchronized
/// concurrent reads.
///
/// # Examples
///
/// ```
/// use simple_result::{Error, ErrorKind};
///
/// let error = Error::problem("Order.Rejected", "The order failed a business rule.");
/// assert_eq!(error.code(), "Order.Rejected");
/// assert_eq!(error.kind(), ErrorKind::Problem);
/// assert!(error.validation_errors().is_none());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    Plain {
        code: Cow<'static, str>,
        description: Cow<'static, str>,
        kind: ErrorKind,
    },
    Validation(ValidationError),
}

impl Error {
    /// The canonical "no error" sentinel carried by every successful
    /// [`Outcome`](crate::Outcome).
    pub const NONE: Error = Error::Plain {
        code: Cow::Borrowed("None"),
        description: Cow::Borrowed("None"),
        kind: ErrorKind::None,
    };

    /// Sentinel used when a success path received an absent value where a
    /// value was required.
    pub const NULL_VALUE: Error = Error::Plain {
        code: Cow::Borrowed("Error.NullValue"),
        description: Cow::Borrowed("Null value was provided."),
        kind: ErrorKind::None,
    };

    fn plain(
        code: Cow<'static, str>,
        description: Cow<'static, str>,
        kind: ErrorKind,
    ) -> Self {
        if code.is_empty() || description.is_empty() {
            panic!("an Error requires a non-empty code and description");
        }
        Error::Plain {
            code,
            description,
            kind,
        }
    }

    /// Creates a generic domain problem ([`ErrorKind::Problem`]).
    ///
    /// # Panics
    ///
    /// Panics if `code` or `description` is empty. Empty descriptors are a
    /// bug in the calling code, not a recoverable failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, ErrorKind};
    ///
    /// let error = Error::problem("Order.Rejected", "The order failed a business rule.");
    /// assert_eq!(error.kind(), ErrorKind::Problem);
    /// ```
    #[inline]
    pub fn problem(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::plain(code.into(), description.into(), ErrorKind::Problem)
    }

    /// Creates a missing-resource error ([`ErrorKind::NotFound`]).
    ///
    /// # Panics
    ///
    /// Panics if `code` or `description` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, ErrorKind};
    ///
    /// let error = Error::not_found("User.NotFound", "No user matches the supplied id.");
    /// assert_eq!(error.kind(), ErrorKind::NotFound);
    /// ```
    #[inline]
    pub fn not_found(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::plain(code.into(), description.into(), ErrorKind::NotFound)
    }

    /// Creates a state-conflict error ([`ErrorKind::Conflict`]).
    ///
    /// # Panics
    ///
    /// Panics if `code` or `description` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, ErrorKind};
    ///
    /// let error = Error::conflict("User.EmailTaken", "The email address is already in use.");
    /// assert_eq!(error.kind(), ErrorKind::Conflict);
    /// ```
    #[inline]
    pub fn conflict(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::plain(code.into(), description.into(), ErrorKind::Conflict)
    }

    /// Creates an unclassified server-side error ([`ErrorKind::Unknown`]).
    ///
    /// Boundary layers collapse this kind to a generic response so internal
    /// detail never leaks.
    ///
    /// # Panics
    ///
    /// Panics if `code` or `description` is empty.
    #[inline]
    pub fn unknown(
        code: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::plain(code.into(), description.into(), ErrorKind::Unknown)
    }

    /// Creates an empty [`ValidationError`] builder with the given code and
    /// a fixed generic description.
    ///
    /// Populate it with
    /// [`try_add_property_errors`](ValidationError::try_add_property_errors),
    /// then convert it into an [`Error`] or a failed
    /// [`Outcome`](crate::Outcome) to freeze it.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::Error;
    ///
    /// let mut validation = Error::validation("User.Invalid");
    /// validation.try_add_property_errors("Email", ["Required"]);
    /// assert!(validation.has_errors());
    /// ```
    #[inline]
    pub fn validation(code: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new(code.into())
    }

    /// Returns the error code.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        match self {
            Error::Plain { code, .. } => code,
            Error::Validation(validation) => validation.code(),
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    #[inline]
    pub fn description(&self) -> &str {
        match self {
            Error::Plain { description, .. } => description,
            Error::Validation(validation) => validation.description(),
        }
    }

    /// Returns the error classification.
    ///
    /// The validation variant is always [`ErrorKind::Validation`].
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Plain { kind, .. } => *kind,
            Error::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Returns the per-property validation messages, when this error is a
    /// [`ValidationError`] with at least one accepted entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::Error;
    ///
    /// let mut validation = Error::validation("User.Invalid");
    /// validation.try_add_property_errors("Email", ["Required"]);
    ///
    /// let error = Error::from(validation);
    /// let entries = error.validation_errors().unwrap();
    /// assert_eq!(entries[0].name(), "Email");
    /// ```
    #[must_use]
    #[inline]
    pub fn validation_errors(&self) -> Option<&[PropertyError]> {
        match self {
            Error::Plain { .. } => None,
            Error::Validation(validation) => validation.validation_errors(),
        }
    }

    /// Returns `true` if this is the canonical [`Error::NONE`] sentinel.
    ///
    /// [`Error::NULL_VALUE`] shares the `None` kind but is a distinct value
    /// and reports `false` here.
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

impl core::error::Error for Error {}
