//! The two-track [`Outcome`] type and its combinator surface.
//!
//! This module provides the [`Outcome`] type, a closed sum of exactly two
//! variants: a success carrying a value, or a failure carrying an error.
//! Unlike accumulating validation types, `Outcome` fails fast: every
//! combinator short-circuits on the first error it sees.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type representing either a value or an error
//! - Iterator adapters over the value and error channels
//! - `From`/`FromIterator` implementations for composing outcomes
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! let won: Outcome<i32, String> = Outcome::Ok(42);
//! assert!(won.is_ok());
//!
//! let lost: Outcome<i32, &str> = Outcome::Err("out of range");
//! assert_eq!(lost.unwrap_or(0), 0);
//! ```
use smallvec::SmallVec;

pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;

/// SmallVec-backed collection used for the error list produced by
/// [`aggregate::any`](crate::aggregate::any).
///
/// Uses inline storage for up to 4 elements to avoid heap allocations
/// when aggregating small batches.
pub type ErrorVec<E> = SmallVec<[E; 4]>;
