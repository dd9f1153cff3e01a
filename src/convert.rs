//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to incrementally adopt
//! `outcome-rail` by wrapping legacy results or by flattening outcomes back
//! into core types when interacting with external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let missing: Option<i32> = None;
//! assert_eq!(option_to_outcome(missing, "absent"), Outcome::Err("absent"));
//! ```

use crate::outcome::Outcome;

/// Converts an `Outcome` to a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(value)` if the outcome succeeded
/// * `Err(error)` if it failed
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let won: Outcome<i32, &str> = Outcome::Ok(42);
/// assert_eq!(outcome_to_result(won), Ok(42));
///
/// let lost: Outcome<i32, &str> = Outcome::Err("boom");
/// assert_eq!(outcome_to_result(lost), Err("boom"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// let ok_result: Result<i32, &str> = Ok(42);
/// assert_eq!(result_to_outcome(ok_result), Outcome::Ok(42));
///
/// let err_result: Result<i32, &str> = Err("failed");
/// assert_eq!(result_to_outcome(err_result), Outcome::Err("failed"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an `Option` to an `Outcome`, supplying the error for `None`.
///
/// # Arguments
///
/// * `option` - The option to convert
/// * `error` - Error used when the option is empty
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(1), "absent"), Outcome::Ok(1));
/// assert_eq!(option_to_outcome(None::<i32>, "absent"), Outcome::Err("absent"));
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(error),
    }
}
