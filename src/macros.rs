//! Ergonomic macros for wrapping `Result`-producing code.
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression or
//!   block and converts it into an [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome;
//!
//! let parsed = outcome!("42".parse::<i32>());
//! assert_eq!(parsed.into_value(), Some(42));
//! ```

/// Wraps a `Result`-producing expression or block into an
/// [`Outcome`](crate::Outcome).
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```rust
/// use outcome_rail::outcome;
///
/// // Simple expression
/// let parsed = outcome!("8080".parse::<u16>());
/// assert!(parsed.is_ok());
///
/// // Block syntax with multiple statements
/// let combined = outcome!({
///     let host = "localhost";
///     "8080".parse::<u16>().map(|port| format!("{host}:{port}"))
/// });
/// assert_eq!(combined.into_value(), Some("localhost:8080".to_string()));
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}
