//! Extension trait for moving `Result` values onto the outcome rail.
//!
//! This module provides [`ResultExt`], which adds a conversion method to
//! every `core::result::Result` so host code can enter the combinator
//! surface without an explicit adapter call site.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//!
//! let doubled = "21".parse::<i32>().into_outcome().map(|n| n * 2);
//! assert_eq!(doubled.into_value(), Some(42));
//! ```

use crate::outcome::Outcome;

/// Extension trait converting `Result` values into [`Outcome`] ergonomically.
///
/// This is the adoption seam: code that produces plain results can join an
/// outcome chain mid-expression instead of wrapping at the call site.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::Outcome;
///
/// fn read_port(raw: &str) -> Outcome<u16, std::num::ParseIntError> {
///     raw.parse::<u16>().into_outcome()
/// }
///
/// assert!(read_port("8080").is_ok());
/// assert!(read_port("eighty").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts `self` into an [`Outcome`], mapping `Ok` to `Ok` and `Err`
    /// to `Err`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}
