use core::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-track outcome that either succeeded with a value or failed with an error.
///
/// `Outcome<T, E>` represents a computation that either succeeds with a value of
/// type `T` or fails with exactly one error of type `E`. It is a fail-fast type:
/// every combinator short-circuits on the first error, which makes it the right
/// shape for sequencing dependent steps. For accumulating many independent
/// errors, collect outcomes with [`crate::aggregate::any`] instead.
///
/// Once constructed, an outcome never changes variant or payload; combinators
/// consume the outcome and produce a new one.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Ok(T)` - Contains a successful value
/// * `Err(E)` - Contains an error
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let won: Outcome<i32, &str> = Outcome::Ok(42);
/// assert!(won.is_ok());
///
/// let lost: Outcome<i32, &str> = Outcome::Err("overflow");
/// assert!(lost.is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a plain `Result`, mapping `Ok` to `Ok` and `Err` to `Err`.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to convert
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::from_result("42".parse::<i32>());
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(42);
    /// assert_eq!(outcome.into_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Returns `true` if the outcome carries a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(42);
    /// assert!(outcome.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome carries an error.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome carries a value and that value matches
    /// the predicate.
    ///
    /// On `Err` the predicate is never invoked.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Test applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(4);
    /// assert!(outcome.is_ok_and(|v| v % 2 == 0));
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert!(!failed.is_ok_and(|v| v % 2 == 0));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome carries an error and that error matches
    /// the predicate.
    ///
    /// On `Ok` the predicate is never invoked.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Test applied to the error
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("timeout");
    /// assert!(failed.is_err_and(|e| e.contains("time")));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Maps the success value using the provided function.
    ///
    /// If the outcome is an error, the error is preserved unchanged and the
    /// function is never invoked. `f` must not fail; a fallible step belongs
    /// in [`bind`](Self::bind).
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(21);
    /// assert_eq!(outcome.map(|x| x * 2), Outcome::Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error using the provided function, leaving a success untouched.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, i32> = Outcome::Err(404);
    /// let described = failed.map_err(|code| format!("http {code}"));
    /// assert_eq!(described, Outcome::Err("http 404".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains a fallible computation, flattening the resulting outcome.
    ///
    /// On success, invokes `f` with the value and returns its outcome
    /// directly. On error, the error passes through with an `Into`
    /// conversion to the combined error type `G`; when the error types
    /// coincide the conversion is the identity and the error is returned
    /// unchanged. The `E: Into<G>` bound is how the widened error channel is
    /// expressed: either side of the chain may have produced the error, so
    /// both error types must convert into the output error type.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(8).bind(half), Outcome::Ok(4));
    /// assert_eq!(Outcome::<i32, &str>::Ok(3).bind(half), Outcome::Err("odd"));
    /// assert_eq!(Outcome::<i32, &str>::Err("earlier").bind(half), Outcome::Err("earlier"));
    /// ```
    #[must_use]
    #[inline]
    pub fn bind<U, G, F>(self, f: F) -> Outcome<U, G>
    where
        F: FnOnce(T) -> Outcome<U, G>,
        E: Into<G>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error.into()),
        }
    }

    /// Chains a recovery computation on the error channel.
    ///
    /// On error, invokes `f` with the error and returns its outcome directly;
    /// this is how errors are recovered into a new success or rewritten into
    /// a new error. On success, the value passes through with an `Into`
    /// conversion to the combined value type `U`, dual to [`bind`](Self::bind).
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the recovery outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32, &str>::Err("missing")
    ///     .bind_err(|_| Outcome::<i32, &str>::Ok(0));
    /// assert_eq!(recovered, Outcome::Ok(0));
    ///
    /// let untouched = Outcome::<i32, &str>::Ok(7)
    ///     .bind_err(|_| Outcome::<i32, &str>::Ok(0));
    /// assert_eq!(untouched, Outcome::Ok(7));
    /// ```
    #[must_use]
    #[inline]
    pub fn bind_err<U, G, F>(self, f: F) -> Outcome<U, G>
    where
        F: FnOnce(E) -> Outcome<U, G>,
        T: Into<U>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value.into()),
            Self::Err(error) => f(error),
        }
    }

    /// Exhaustively dispatches to exactly one of the two handlers.
    ///
    /// This is the canonical total elimination: every other combinator can be
    /// written in terms of it. The matching handler receives the payload and
    /// its return value is returned directly.
    ///
    /// # Arguments
    ///
    /// * `on_ok` - Handler for the success value
    /// * `on_err` - Handler for the error
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(2);
    /// let text = outcome.match_with(|v| format!("value {v}"), |e| format!("error {e}"));
    /// assert_eq!(text, "value 2");
    /// ```
    #[inline]
    pub fn match_with<U, FOk, FErr>(self, on_ok: FOk, on_err: FErr) -> U
    where
        FOk: FnOnce(T) -> U,
        FErr: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Invokes `f` with a reference to the success value, for effect only.
    ///
    /// The outcome is returned unchanged regardless of what `f` does. On an
    /// error, `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = 0;
    /// let outcome = Outcome::<i32, &str>::Ok(5).tap(|v| seen = *v);
    /// assert_eq!(seen, 5);
    /// assert_eq!(outcome, Outcome::Ok(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Invokes `f` with a reference to the error, for effect only.
    ///
    /// The outcome is returned unchanged regardless of what `f` does. On a
    /// success, `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut logged = String::new();
    /// let outcome = Outcome::<i32, &str>::Err("boom").tap_err(|e| logged.push_str(e));
    /// assert_eq!(logged, "boom");
    /// assert_eq!(outcome, Outcome::Err("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Combines two outcomes into a tuple; the first error wins.
    ///
    /// If both outcomes succeed, returns a tuple of both values. Otherwise
    /// returns the left error if present, the right error if not.
    ///
    /// # Arguments
    ///
    /// * `other` - Another outcome to combine with this one
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let a: Outcome<i32, &str> = Outcome::Ok(1);
    /// let b: Outcome<char, &str> = Outcome::Ok('x');
    /// assert_eq!(a.zip(b), Outcome::Ok((1, 'x')));
    ///
    /// let left: Outcome<i32, &str> = Outcome::Err("left");
    /// let right: Outcome<char, &str> = Outcome::Err("right");
    /// assert_eq!(left.zip(right), Outcome::Err("left"));
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok((a, b)),
            (Self::Err(e), _) => Outcome::Err(e),
            (_, Outcome::Err(e)) => Outcome::Err(e),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<String, String> = Outcome::Ok("hi".to_string());
    /// assert_eq!(outcome.as_ref().map(|s| s.len()), Outcome::Ok(2));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[must_use]
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success value, or panics with the error itself as the
    /// panic payload.
    ///
    /// Callers that want a descriptive failure should use
    /// [`expect`](Self::expect); callers that want to handle the error should
    /// use [`unwrap_or`](Self::unwrap_or), [`match_with`](Self::match_with),
    /// or [`bind`](Self::bind) instead.
    ///
    /// # Panics
    ///
    /// Panics on `Err`, raising the held error value unchanged as the panic
    /// payload. The payload can be recovered with
    /// [`catch::wrap`](crate::catch::wrap) and downcast back to `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(3);
    /// assert_eq!(outcome.unwrap(), 3);
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: core::any::Any + Send,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => std::panic::panic_any(error),
        }
    }

    /// Returns the success value, or panics with the `Debug` rendering of the
    /// error.
    ///
    /// Without `std` there is no `panic_any`, so the error payload cannot be
    /// raised unchanged; the `Debug` message is the closest available signal.
    ///
    /// # Panics
    ///
    /// Panics on `Err`.
    #[cfg(not(feature = "std"))]
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("called `Outcome::unwrap()` on an `Err` value: {error:?}"),
        }
    }

    /// Returns the success value, or hands the error to a diverging handler.
    ///
    /// The handler must never return normally; this contract is enforced at
    /// compile time by requiring it to return [`Infallible`], which has no
    /// values. A handler can satisfy the bound only by panicking or aborting.
    ///
    /// # Arguments
    ///
    /// * `unwrapper` - Diverging handler invoked with the error
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(7);
    /// let value = outcome.unwrap_by(|_| unreachable!());
    /// assert_eq!(value, 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_by<F>(self, unwrapper: F) -> T
    where
        F: FnOnce(E) -> Infallible,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => match unwrapper(error) {},
        }
    }

    /// Returns the success value, or panics with `msg`, discarding the error.
    ///
    /// Unlike [`unwrap`](Self::unwrap), the original error payload is
    /// dropped in favor of the caller's message; this is the "this should not
    /// have failed" signal.
    ///
    /// # Panics
    ///
    /// Panics with `msg` on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(1);
    /// assert_eq!(outcome.expect("freshly constructed"), 1);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{msg}"),
        }
    }

    /// Returns the success value, or `default` on error.
    ///
    /// The error is discarded. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(failed.unwrap_or(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes a fallback from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<usize, &str> = Outcome::Err("boom");
    /// assert_eq!(failed.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the payload regardless of variant, typed as a common supertype.
    ///
    /// This is a total, failure-free extraction that loses the variant
    /// information; use it when the caller only needs whatever the outcome
    /// carries. Both channels must convert into the target type `U`, the
    /// least upper bound of the two payload types.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let message: String = Outcome::<&str, &str>::Err("fallback").union();
    /// assert_eq!(message, "fallback");
    /// ```
    #[must_use]
    #[inline]
    pub fn union<U>(self) -> U
    where
        T: Into<U>,
        E: Into<U>,
    {
        match self {
            Self::Ok(value) => value.into(),
            Self::Err(error) => error.into(),
        }
    }

    /// Extracts the value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(42);
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Extracts the error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(failed.into_error(), Some("boom"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }
}

/// Constructs a successful outcome holding `value`.
///
/// Free-function twin of the `Ok` variant, convenient in combinator chains
/// where a closure must produce an outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, Outcome};
///
/// let outcome = ok::<i32, &str>(42);
/// assert_eq!(outcome, Outcome::Ok(42));
/// ```
#[must_use]
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Constructs a failed outcome holding `error`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, Outcome};
///
/// let outcome = err::<i32, &str>("boom");
/// assert_eq!(outcome, Outcome::Err("boom"));
/// ```
#[must_use]
#[inline]
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}
