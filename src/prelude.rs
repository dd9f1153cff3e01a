//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`]
//! - **Types**: [`Outcome`], [`ErrorVec`]
//! - **Constructors**: [`ok`], [`err`]
//! - **Aggregates**: [`all`], [`any`], [`fold`]
//! - **Traits**: [`ResultExt`]
//! - **Adapters**: [`wrap`] (with the `std` feature)
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn checked_div(num: i32, den: i32) -> Outcome<i32, &'static str> {
//!     if den == 0 {
//!         err("division by zero")
//!     } else {
//!         ok(num / den)
//!     }
//! }
//!
//! let quotient = checked_div(84, 2).map(|q| q / 2);
//! assert_eq!(quotient, Outcome::Ok(21));
//! ```
//!
//! ## Entering from a Result
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let widened = "21".parse::<i32>().into_outcome().map(|n| n * 2);
//! assert_eq!(widened.into_value(), Some(42));
//! ```

// Macros
pub use crate::outcome;

// Core type and constructors
pub use crate::outcome::{err, ok, ErrorVec, Outcome};

// Aggregates
pub use crate::aggregate::{all, any, fold};

// Traits
pub use crate::traits::ResultExt;

// Panic boundary
#[cfg(feature = "std")]
pub use crate::catch::{wrap, PanicPayload};
