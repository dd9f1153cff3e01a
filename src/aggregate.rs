//! Aggregate combinators over sequences of outcomes.
//!
//! These free functions collapse a batch of [`Outcome`] values into one:
//! [`all`] succeeds only when every input does, [`any`] succeeds as soon as
//! one input does, and [`fold`] threads an accumulator through a list of
//! fallible steps. All three short-circuit in iteration order.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::aggregate::{all, any};
//! use outcome_rail::Outcome;
//!
//! let batch = vec![Outcome::<i32, &str>::Ok(1), Outcome::Ok(2)];
//! assert_eq!(all(batch), Outcome::Ok(vec![1, 2]));
//!
//! let attempts = vec![Outcome::<i32, &str>::Err("cold"), Outcome::Ok(2)];
//! assert_eq!(any(attempts), Outcome::Ok(2));
//! ```

use crate::alloc_type::Vec;
use crate::outcome::{ErrorVec, Outcome};

/// Collapses a sequence of outcomes into an outcome of all their values.
///
/// Short-circuits to the *first* error encountered in iteration order and
/// returns it unchanged; later items are not consumed. If no error is found,
/// returns `Ok` of every value in the original order.
///
/// This is the free-function spelling of collecting into
/// `Outcome<Vec<T>, E>`; use `.collect()` directly to aggregate into another
/// collection type.
///
/// # Arguments
///
/// * `results` - The outcomes to aggregate
///
/// # Examples
///
/// ```
/// use outcome_rail::aggregate::all;
/// use outcome_rail::Outcome;
///
/// let ok = all(vec![Outcome::<i32, &str>::Ok(1), Outcome::Ok(2), Outcome::Ok(3)]);
/// assert_eq!(ok, Outcome::Ok(vec![1, 2, 3]));
///
/// let failed = all(vec![Outcome::<i32, &str>::Ok(1), Outcome::Err("x"), Outcome::Ok(3)]);
/// assert_eq!(failed, Outcome::Err("x"));
/// ```
#[must_use]
#[inline]
pub fn all<T, E, I>(results: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    results.into_iter().collect()
}

/// Returns the first success in a sequence of outcomes.
///
/// Short-circuits to the *first* `Ok` encountered in iteration order and
/// returns it unchanged; later items are not consumed. If every input is an
/// error, returns `Err` of all error values in the original order, one per
/// input. Dual of [`all`].
///
/// # Arguments
///
/// * `results` - The outcomes to scan
///
/// # Examples
///
/// ```
/// use outcome_rail::aggregate::any;
/// use outcome_rail::Outcome;
///
/// let first = any(vec![Outcome::<i32, &str>::Err("a"), Outcome::Ok(2), Outcome::Err("c")]);
/// assert_eq!(first, Outcome::Ok(2));
///
/// let none = any(vec![Outcome::<i32, &str>::Err("a"), Outcome::Err("b")]);
/// assert_eq!(none.into_error().unwrap().into_vec(), vec!["a", "b"]);
/// ```
#[must_use]
pub fn any<T, E, I>(results: I) -> Outcome<T, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut errors = ErrorVec::new();
    for result in results {
        match result {
            Outcome::Ok(value) => return Outcome::Ok(value),
            Outcome::Err(error) => errors.push(error),
        }
    }
    Outcome::Err(errors)
}

/// Threads an accumulator through a list of fallible steps, left to right.
///
/// Starts from `init` and invokes `folder(accumulator, item, index)` for each
/// item. A step returning `Err` stops the fold immediately and becomes the
/// overall result; the remaining items are never visited. If the list is
/// exhausted, returns `Ok` of the final accumulator.
///
/// Equivalent to starting with `Ok(init)` and [`bind`](Outcome::bind)-chaining
/// every step.
///
/// # Arguments
///
/// * `items` - The items to fold over
/// * `init` - Initial accumulator value
/// * `folder` - Step function receiving `(accumulator, item, index)`
///
/// # Examples
///
/// ```
/// use outcome_rail::aggregate::fold;
/// use outcome_rail::Outcome;
///
/// let sum = fold([1, 2, 3], 0, |acc, v, _| Outcome::<i32, &str>::Ok(acc + v));
/// assert_eq!(sum, Outcome::Ok(6));
///
/// let stopped = fold([1, 2, 3], 0, |acc, v, _| {
///     if v == 2 {
///         Outcome::Err("stop")
///     } else {
///         Outcome::Ok(acc + v)
///     }
/// });
/// assert_eq!(stopped, Outcome::Err("stop"));
/// ```
#[must_use]
pub fn fold<A, T, E, I, F>(items: I, init: A, mut folder: F) -> Outcome<A, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T, usize) -> Outcome<A, E>,
{
    let mut acc = init;
    for (index, item) in items.into_iter().enumerate() {
        match folder(acc, item, index) {
            Outcome::Ok(next) => acc = next,
            Outcome::Err(error) => return Outcome::Err(error),
        }
    }
    Outcome::Ok(acc)
}
