//! Tracing integration for outcome-rail.
//!
//! This module provides utilities for integrating outcome-rail with the
//! `tracing` ecosystem, emitting structured events from the error channel
//! without leaving a combinator chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.2", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::outcome::Outcome;

/// Extension trait that logs the error channel through `tracing`.
///
/// These are [`tap_err`](Outcome::tap_err) hooks with a fixed effect: the
/// outcome always passes through unchanged.
///
/// # Example
///
/// ```rust
/// use outcome_rail::tracing_ext::TraceOutcome;
/// use outcome_rail::Outcome;
///
/// let failed: Outcome<i32, &str> = Outcome::Err("connection refused");
/// let same = failed.trace_err("loading dashboard");
/// assert_eq!(same, Outcome::Err("connection refused"));
/// ```
pub trait TraceOutcome<T, E> {
    /// Emits a `tracing` error event for a failed outcome, then returns the
    /// outcome unchanged.
    ///
    /// The event carries `message` and the `Display` rendering of the error.
    /// On success no event is emitted.
    #[must_use]
    fn trace_err(self, message: &str) -> Self;
}

impl<T, E: Display> TraceOutcome<T, E> for Outcome<T, E> {
    fn trace_err(self, message: &str) -> Self {
        self.tap_err(|error| tracing::error!(error = %error, "{}", message))
    }
}
