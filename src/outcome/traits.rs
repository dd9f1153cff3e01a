use crate::outcome::core::Outcome;

/// `Result` converts losslessly in both directions; the variants correspond
/// one to one.
impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects an iterator of outcomes into an outcome of a collection,
/// short-circuiting on the first error.
///
/// The first `Err` encountered in iteration order is returned unchanged and
/// no further items are consumed. If every item is `Ok`, the values are
/// collected in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let items = vec![Outcome::<i32, &str>::Ok(1), Outcome::Ok(2), Outcome::Ok(3)];
/// let collected: Outcome<Vec<i32>, &str> = items.into_iter().collect();
/// assert_eq!(collected, Outcome::Ok(vec![1, 2, 3]));
///
/// let mixed = vec![Outcome::<i32, &str>::Ok(1), Outcome::Err("bad"), Outcome::Ok(3)];
/// let collected: Outcome<Vec<i32>, &str> = mixed.into_iter().collect();
/// assert_eq!(collected, Outcome::Err("bad"));
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        // Adapter that feeds values through and parks the first error,
        // ending the inner iteration so later items stay unconsumed.
        struct ShortCircuit<'a, I, E> {
            iter: I,
            error: &'a mut Option<E>,
        }

        impl<I, T, E> Iterator for ShortCircuit<'_, I, E>
        where
            I: Iterator<Item = Outcome<T, E>>,
        {
            type Item = T;

            fn next(&mut self) -> Option<Self::Item> {
                if self.error.is_some() {
                    return None;
                }
                match self.iter.next() {
                    Some(Outcome::Ok(value)) => Some(value),
                    Some(Outcome::Err(error)) => {
                        *self.error = Some(error);
                        None
                    }
                    None => None,
                }
            }
        }

        let mut error = None;
        let collected: C = ShortCircuit {
            iter: iter.into_iter(),
            error: &mut error,
        }
        .collect();

        match error {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}
