use crate::types::Error;

/// The outcome of a fallible operation: success (optionally carrying a value)
/// or failure (carrying an [`Error`]), mutually exclusive by construction.
///
/// The unit and valued forms share one generic type; `Outcome` with the
/// default parameter is the value-less variant. Construction is private and
/// goes through the factories, which enforce the core invariant: a successful
/// outcome always holds [`Error::NONE`], a failed outcome never does.
/// Violating the invariant is a bug in the calling code and panics at the
/// construction site; it is never reported through the outcome channel.
///
/// Expected domain failures are plain values: build an [`Error`], wrap it
/// with [`failure`](Outcome::failure), and return it up the call chain.
/// Callers branch on [`is_success`](Outcome::is_success) /
/// [`is_failure`](Outcome::is_failure) or dispatch with
/// [`match_with`](Outcome::match_with).
///
/// # Examples
///
/// ```
/// use simple_result::{Error, Outcome};
///
/// fn find_age(id: u32) -> Outcome<u8> {
///     if id == 7 {
///         Outcome::success_with(34)
///     } else {
///         Outcome::failure(Error::not_found("User.NotFound", "No user matches the supplied id."))
///     }
/// }
///
/// assert_eq!(find_age(7).value(), Some(&34));
/// assert!(find_age(8).is_failure());
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Outcome<T = ()> {
    value: Option<T>,
    is_success: bool,
    error: Error,
}

impl Outcome {
    /// Creates a successful value-less outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, Outcome};
    ///
    /// let outcome = Outcome::success();
    /// assert!(outcome.is_success());
    /// assert!(outcome.error().is_none());
    /// ```
    #[inline]
    pub fn success() -> Self {
        Self::new(Some(()), true, Error::NONE)
    }

    /// Converts `true` into a successful outcome.
    ///
    /// `false` has no defined mapping in this API: a failure needs an
    /// [`Error`] describing it, which the caller must construct explicitly.
    ///
    /// # Panics
    ///
    /// Panics when `flag` is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::Outcome;
    ///
    /// assert!(Outcome::from_bool(true).is_success());
    /// ```
    #[inline]
    pub fn from_bool(flag: bool) -> Self {
        if !flag {
            panic!("Outcome::from_bool has no failure mapping; construct the failure explicitly");
        }
        Self::success()
    }
}

impl<T> Outcome<T> {
    fn new(value: Option<T>, is_success: bool, error: Error) -> Self {
        if is_success != error.is_none() {
            panic!("invalid construction of Outcome: success requires Error::NONE, failure requires a real error");
        }
        Outcome {
            value,
            is_success,
            error,
        }
    }

    /// Creates a successful outcome carrying `value`.
    ///
    /// For a possibly-absent value, use [`from_value`](Outcome::from_value),
    /// which maps absence to a [`Error::NULL_VALUE`] failure instead of ever
    /// admitting a value-less success.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::Outcome;
    ///
    /// let outcome = Outcome::success_with(42);
    /// assert_eq!(outcome.value(), Some(&42));
    /// ```
    #[inline]
    pub fn success_with(value: T) -> Self {
        Self::new(Some(value), true, Error::NONE)
    }

    /// Creates a failed outcome carrying `error`.
    ///
    /// # Panics
    ///
    /// Panics if `error` is the [`Error::NONE`] sentinel, which is reserved
    /// for successful outcomes.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, Outcome};
    ///
    /// let outcome: Outcome<i32> =
    ///     Outcome::failure(Error::problem("Order.Rejected", "The order failed a business rule."));
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.value(), None);
    /// ```
    #[inline]
    pub fn failure(error: impl Into<Error>) -> Self {
        Self::new(None, false, error.into())
    }

    /// Converts a possibly-absent value into an outcome.
    ///
    /// `Some(value)` becomes a success; `None` becomes a failure carrying
    /// [`Error::NULL_VALUE`]. An absent value never slips through as a
    /// success.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, Outcome};
    ///
    /// assert!(Outcome::from_value(Some(5)).is_success());
    ///
    /// let missing: Outcome<i32> = Outcome::from_value(None);
    /// assert_eq!(*missing.error(), Error::NULL_VALUE);
    /// ```
    #[inline]
    pub fn from_value(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success_with(value),
            None => Self::failure(Error::NULL_VALUE),
        }
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns `true` if the operation failed.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// Returns the carried error: [`Error::NONE`] for a success, the failure
    /// descriptor otherwise.
    #[must_use]
    #[inline]
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Returns the carried value, or `None` for a failed outcome.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the outcome and returns the carried value, or `None` for a
    /// failed outcome.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Dispatches to one of two continuations based on the outcome state.
    ///
    /// `on_success` receives the contained value; `on_failure` receives the
    /// whole outcome, so the error (and any validation detail) stays
    /// reachable. Exactly one continuation runs, exactly once, synchronously.
    ///
    /// Absent continuations are unrepresentable: both closures are part of
    /// the signature, so there is no runtime misuse to detect.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, Outcome};
    ///
    /// let doubled = Outcome::success_with(5).match_with(|x| x * 2, |_failed| 0);
    /// assert_eq!(doubled, 10);
    ///
    /// let code: Outcome<i32> =
    ///     Outcome::failure(Error::not_found("User.NotFound", "No user matches the supplied id."));
    /// let label = code.match_with(|_| "ok", |failed| {
    ///     assert_eq!(failed.error().code(), "User.NotFound");
    ///     "failed"
    /// });
    /// assert_eq!(label, "failed");
    /// ```
    #[inline]
    pub fn match_with<U, S, F>(mut self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Self) -> U,
    {
        if self.is_success {
            let value = self
                .value
                .take()
                .expect("a successful Outcome always carries a value");
            on_success(value)
        } else {
            on_failure(self)
        }
    }

    /// Converts into a [`core::result::Result`], enabling `?` propagation in
    /// code that speaks the standard vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_result::{Error, Outcome};
    ///
    /// fn fetch() -> Result<u8, Error> {
    ///     Outcome::success_with(7).into_result()
    /// }
    ///
    /// assert_eq!(fetch(), Ok(7));
    /// ```
    pub fn into_result(mut self) -> Result<T, Error> {
        if self.is_success {
            Ok(self
                .value
                .take()
                .expect("a successful Outcome always carries a value"))
        } else {
            Err(self.error)
        }
    }
}
