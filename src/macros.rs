//! Ergonomic macro for building populated validation errors.
//!
//! [`macro@crate::validation`] removes the builder boilerplate when the
//! property entries are known up front, while keeping every accumulation rule
//! of [`ValidationError`](crate::ValidationError) intact.

/// Builds a [`ValidationError`](crate::ValidationError) declaratively.
///
/// Expands to [`Error::validation`](crate::Error::validation) followed by one
/// [`try_add_property_errors`](crate::ValidationError::try_add_property_errors)
/// call per entry, so insertion order, first-registration-wins and the
/// empty-contribution no-ops all behave exactly as in the imperative form.
///
/// # Syntax
///
/// - `validation!(code)` - An empty accumulator, same as `Error::validation`
/// - `validation!(code, name => [messages, ...], ...)` - Populated entries
///
/// # Examples
///
/// ```
/// use simple_result::{validation, Outcome};
///
/// let error = validation!(
///     "User.Invalid",
///     "Email" => ["Required"],
///     "Age" => ["MustBePositive", "MustBeAnInteger"],
/// );
///
/// let entries = error.validation_errors().unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].messages(), ["MustBePositive", "MustBeAnInteger"]);
///
/// let outcome: Outcome<()> = error.into();
/// assert!(outcome.is_failure());
/// ```
#[macro_export]
macro_rules! validation {
    ($code:expr $(,)?) => {
        $crate::Error::validation($code)
    };
    ($code:expr, $($name:expr => [$($message:expr),+ $(,)?]),+ $(,)?) => {{
        let mut error = $crate::Error::validation($code);
        $(
            error.try_add_property_errors($name, [$($message),+]);
        )+
        error
    }};
}
