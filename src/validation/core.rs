use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::alloc_type::{Cow, String};
use crate::types::MessageVec;

/// Fixed description shared by every validation error.
const VALIDATION_DESCRIPTION: &str = "One or more validation errors occurred.";

/// SmallVec-backed collection of accepted property entries.
///
/// Inline storage for up to 2 entries; most validation failures touch only a
/// couple of properties.
pub type PropertyVec = SmallVec<[PropertyError; 2]>;

/// A single validation contribution: a property name and the ordered messages
/// recorded against it.
///
/// # Examples
///
/// ```
/// use simple_result::PropertyError;
///
/// let entry = PropertyError::new("Email", ["Required", "InvalidFormat"]);
/// assert_eq!(entry.name(), "Email");
/// assert_eq!(entry.messages().len(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PropertyError {
    name: String,
    messages: MessageVec,
}

impl PropertyError {
    /// Creates an entry from a property name and its messages, preserving
    /// message order.
    #[must_use]
    pub fn new<N, I, S>(name: N, messages: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyError {
            name: name.into(),
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the messages in the order they were supplied.
    #[must_use]
    #[inline]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// An [`Error`](crate::Error) specialization carrying per-property validation
/// messages, built incrementally and frozen on conversion.
///
/// Entries are kept in insertion order. A property name, once accepted, is
/// never overwritten by a later contribution with the same name; the second
/// contribution is a silent no-op. Contributions with an empty or
/// whitespace-only name, or with no non-empty message, are silently ignored
/// rather than treated as errors.
///
/// The accumulator is single-writer by construction: mutation requires
/// `&mut`, and converting into an [`Error`](crate::Error) or a failed
/// [`Outcome`](crate::Outcome) consumes it.
///
/// # Examples
///
/// ```
/// use simple_result::Error;
///
/// let mut validation = Error::validation("User.Invalid");
/// validation.try_add_property_errors("Email", ["Required"]);
/// validation.try_add_property_errors("Email", ["IgnoredDuplicate"]);
///
/// let entries = validation.validation_errors().unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].messages(), ["Required"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidationError {
    code: Cow<'static, str>,
    errors: PropertyVec,
}

impl ValidationError {
    /// Called through [`Error::validation`](crate::Error::validation).
    pub(crate) fn new(code: Cow<'static, str>) -> Self {
        if code.is_empty() {
            panic!("a ValidationError requires a non-empty code");
        }
        ValidationError {
            code,
            errors: PropertyVec::new(),
        }
    }

    /// Returns the error code.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the fixed generic description.
    #[must_use]
    #[inline]
    pub fn description(&self) -> &str {
        VALIDATION_DESCRIPTION
    }

    /// Records messages against a property, unless the contribution is empty
    /// or the property already has an entry.
    ///
    /// Empty and whitespace-only messages are dropped; if nothing survives,
    /// the call is a no-op. A repeated property name is also a no-op: the
    /// first registration wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::Error;
    ///
    /// let mut validation = Error::validation("User.Invalid");
    /// validation.try_add_property_errors("Age", ["MustBePositive", "MustBeAnInteger"]);
    /// validation.try_add_property_errors("", ["IgnoredEmptyName"]);
    /// validation.try_add_property_errors("Name", Vec::<&str>::new());
    ///
    /// let entries = validation.validation_errors().unwrap();
    /// assert_eq!(entries.len(), 1);
    /// assert_eq!(entries[0].name(), "Age");
    /// ```
    pub fn try_add_property_errors<I, S>(&mut self, property_name: &str, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if property_name.trim().is_empty() {
            return;
        }
        let messages: MessageVec = messages
            .into_iter()
            .map(Into::into)
            .filter(|message| !message.trim().is_empty())
            .collect();
        if messages.is_empty() {
            return;
        }
        if self.contains(property_name) {
            return;
        }
        self.errors.push(PropertyError {
            name: property_name.into(),
            messages,
        });
    }

    /// Batch form of
    /// [`try_add_property_errors`](ValidationError::try_add_property_errors):
    /// applies the same per-entry rule to each [`PropertyError`], skipping
    /// entries with no surviving message.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, PropertyError};
    ///
    /// let mut validation = Error::validation("User.Invalid");
    /// validation.try_add_all([
    ///     PropertyError::new("Email", ["Required"]),
    ///     PropertyError::new("Age", ["MustBePositive"]),
    /// ]);
    ///
    /// assert_eq!(validation.validation_errors().unwrap().len(), 2);
    /// ```
    pub fn try_add_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = PropertyError>,
    {
        for entry in entries {
            self.try_add_property_errors(&entry.name, entry.messages);
        }
    }

    /// Returns `true` iff at least one property entry was accepted.
    #[must_use]
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Read-only, insertion-ordered view of the accepted entries, or `None`
    /// when nothing was accepted.
    #[must_use]
    #[inline]
    pub fn validation_errors(&self) -> Option<&[PropertyError]> {
        if self.has_errors() {
            Some(&self.errors)
        } else {
            None
        }
    }

    fn contains(&self, property_name: &str) -> bool {
        self.errors.iter().any(|entry| entry.name == property_name)
    }
}
