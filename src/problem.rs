//! Transport-neutral rendering of a failed [`Outcome`] as an RFC 9457-style
//! problem response.
//!
//! This is the boundary contract consumed by HTTP adapters: they read the
//! error's code, description and kind, and produce a status code, a problem
//! type URI and, for validation failures, the full property/message map. The
//! core stays free of any HTTP framework; [`ProblemDetails`] is plain data
//! that an adapter serializes or copies into its own response type.
//!
//! Validation, not-found, conflict and generic problems echo their code and
//! description. Every other kind collapses to an opaque server-failure
//! response so internal detail never leaks.
//!
//! # Examples
//!
//! ```
//! use simple_result::{Error, Outcome, ProblemDetails};
//!
//! let mut validation = Error::validation("User.Invalid");
//! validation.try_add_property_errors("Email", ["Required"]);
//!
//! let outcome: Outcome<()> = validation.into();
//! let problem = ProblemDetails::from_outcome(&outcome);
//!
//! assert_eq!(problem.status, 422);
//! assert_eq!(problem.title, "User.Invalid");
//! assert!(problem.errors.is_some());
//! ```

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::alloc_type::Cow;
use crate::types::{Error, ErrorKind, Outcome};
use crate::validation::PropertyVec;

const TYPE_VALIDATION: &str =
    "https://datatracker.ietf.org/doc/html/rfc9110#name-422-unprocessable-content";
const TYPE_PROBLEM: &str = "https://datatracker.ietf.org/doc/html/rfc9110#name-400-bad-request";
const TYPE_NOT_FOUND: &str = "https://datatracker.ietf.org/doc/html/rfc9110#name-404-not-found";
const TYPE_CONFLICT: &str = "https://datatracker.ietf.org/doc/html/rfc9110#name-409-conflict";
const TYPE_SERVER_ERROR: &str =
    "https://datatracker.ietf.org/doc/html/rfc9110#name-500-internal-server-error";

const GENERIC_TITLE: &str = "Server failure.";
const GENERIC_DETAIL: &str = "An unexpected error occurred.";

/// The problem-response view of a failed [`Outcome`].
///
/// With the `serde` feature, serializes to the conventional wire shape:
/// `type`, `title`, `detail`, `status`, and an ordered `errors` object that
/// is present only for validation failures.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProblemDetails {
    /// Problem type URI identifying the failure category.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_uri: Cow<'static, str>,
    /// Short summary; the error code for domain-classified kinds.
    pub title: Cow<'static, str>,
    /// Human-readable explanation; the error description for
    /// domain-classified kinds.
    pub detail: Cow<'static, str>,
    /// Suggested HTTP status code.
    pub status: u16,
    /// Insertion-ordered property/message map, for validation failures only.
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_errors"
        )
    )]
    pub errors: Option<PropertyVec>,
}

impl ProblemDetails {
    /// Builds the problem view of a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics if `outcome` is successful; there is nothing to report, so
    /// reaching this boundary with a success is a bug in the calling code.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, Outcome, ProblemDetails};
    ///
    /// let outcome: Outcome<()> =
    ///     Outcome::failure(Error::not_found("User.NotFound", "No user matches the supplied id."));
    /// let problem = ProblemDetails::from_outcome(&outcome);
    ///
    /// assert_eq!(problem.status, 404);
    /// assert_eq!(problem.detail, "No user matches the supplied id.");
    /// ```
    pub fn from_outcome<T>(outcome: &Outcome<T>) -> Self {
        if outcome.is_success() {
            panic!("cannot build ProblemDetails from a successful Outcome");
        }
        Self::from_error(outcome.error())
    }

    fn from_error(error: &Error) -> Self {
        let kind = error.kind();
        let (title, detail) = match kind {
            ErrorKind::Problem
            | ErrorKind::NotFound
            | ErrorKind::Conflict
            | ErrorKind::Validation => (
                Cow::Owned(error.code().into()),
                Cow::Owned(error.description().into()),
            ),
            _ => (Cow::Borrowed(GENERIC_TITLE), Cow::Borrowed(GENERIC_DETAIL)),
        };
        ProblemDetails {
            type_uri: Cow::Borrowed(type_uri(kind)),
            title,
            detail,
            status: status_code(kind),
            errors: error.validation_errors().map(|entries| entries.into()),
        }
    }
}

fn status_code(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 422,
        ErrorKind::Problem => 400,
        ErrorKind::NotFound => 404,
        ErrorKind::Conflict => 409,
        _ => 500,
    }
}

fn type_uri(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => TYPE_VALIDATION,
        ErrorKind::Problem => TYPE_PROBLEM,
        ErrorKind::NotFound => TYPE_NOT_FOUND,
        ErrorKind::Conflict => TYPE_CONFLICT,
        _ => TYPE_SERVER_ERROR,
    }
}

#[cfg(feature = "serde")]
fn serialize_errors<S>(errors: &Option<PropertyVec>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let entries = errors.as_deref().unwrap_or_default();
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for entry in entries {
        map.serialize_entry(entry.name(), entry.messages())?;
    }
    map.end()
}
