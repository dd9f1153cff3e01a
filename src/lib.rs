//! Two-track outcome values with fail-fast combinators.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Basic Two-Track Flow
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::Ok(port),
//!         Err(e) => Outcome::Err(format!("invalid port '{raw}': {e}")),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1).unwrap_or(80);
//! assert_eq!(port, 8081);
//!
//! let fallback = parse_port("not-a-port").map(|p| p + 1).unwrap_or(80);
//! assert_eq!(fallback, 80);
//! ```
//!
//! ## Aggregating a Batch
//!
//! ```
//! use outcome_rail::{aggregate, Outcome};
//!
//! let batch = vec![
//!     Outcome::<i32, &str>::Ok(1),
//!     Outcome::Ok(2),
//!     Outcome::Ok(3),
//! ];
//! assert_eq!(aggregate::all(batch), Outcome::Ok(vec![1, 2, 3]));
//!
//! let mixed = vec![Outcome::<i32, &str>::Ok(1), Outcome::Err("bad"), Outcome::Ok(3)];
//! assert_eq!(aggregate::all(mixed), Outcome::Err("bad"));
//! ```
//!
//! ## Fallible Left Fold
//!
//! ```
//! use outcome_rail::{aggregate, Outcome};
//!
//! let steps = ["committed", "pushed", "deployed"];
//! let log = aggregate::fold(steps, String::new(), |mut acc, step, index| {
//!     acc.push_str(step);
//!     if index + 1 < 3 {
//!         acc.push_str(" -> ");
//!     }
//!     Outcome::<String, &str>::Ok(acc)
//! });
//! assert_eq!(log, Outcome::Ok("committed -> pushed -> deployed".to_string()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Aggregate combinators over sequences of outcomes (`all`, `any`, `fold`)
pub mod aggregate;
/// std/alloc type aliases shared across feature configurations
pub mod alloc_type;
/// Panic-to-outcome adapter (requires `std` feature)
#[cfg(feature = "std")]
pub mod catch;
/// Conversions between `Outcome`, `Result`, and `Option`
pub mod convert;
/// Macros for wrapping `Result`-producing expressions
pub mod macros;
/// The core `Outcome` type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits bridging `core::result::Result` into `Outcome`
pub mod traits;

/// Tracing integration for the error channel (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export the common surface at the root; the prelude narrows this down
// to the items most programs touch.
pub use aggregate::{all, any, fold};
#[cfg(feature = "std")]
pub use catch::{payload_str, wrap, PanicPayload};
pub use convert::*;
pub use outcome::{err, ok, ErrorVec, Outcome};
pub use traits::*;
#[cfg(feature = "tracing")]
pub use tracing_ext::TraceOutcome;
