//! Eager, collection-producing conveniences built on the pull driver.
//!
//! Each function runs a single primitive over a whole source with the
//! [`append`](crate::reducers::append) reducer and returns the collected
//! `Vec`. For chained or incremental processing, compose transducers and
//! drive them with [`transduce`](crate::drivers::transduce) directly.

use crate::drivers::transduce;
use crate::reducers;
use crate::transducers::{filtering, mapcatting, mapping, taking, taking_while};

/// Collect `f` mapped over `source`.
///
/// # Examples
///
/// ```rust
/// let doubled = transduce::eager::map(|x: i32| x * 2, 0..5);
/// assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
/// ```
pub fn map<F, I, O, S>(f: F, source: S) -> Vec<O>
where
    F: Fn(I) -> O + Clone,
    S: IntoIterator<Item = I>,
{
    transduce(&mapping(f), reducers::append(), Vec::new(), source)
}

/// Collect the elements of `source` satisfying `pred`.
pub fn filter<F, I, S>(pred: F, source: S) -> Vec<I>
where
    F: Fn(&I) -> bool + Clone,
    S: IntoIterator<Item = I>,
{
    transduce(&filtering(pred), reducers::append(), Vec::new(), source)
}

/// Collect the concatenated expansions of `f` over `source`.
pub fn mapcat<F, I, T, S>(f: F, source: S) -> Vec<T::Item>
where
    F: Fn(I) -> T + Clone,
    T: IntoIterator,
    S: IntoIterator<Item = I>,
{
    transduce(&mapcatting(f), reducers::append(), Vec::new(), source)
}

/// Collect the first `limit` elements of `source`.
pub fn take<I, S>(limit: usize, source: S) -> Vec<I>
where
    S: IntoIterator<Item = I>,
{
    transduce(&taking(limit), reducers::append(), Vec::new(), source)
}

/// Collect the leading elements of `source` for which `pred` holds.
pub fn take_while<F, I, S>(pred: F, source: S) -> Vec<I>
where
    F: Fn(&I) -> bool + Clone,
    S: IntoIterator<Item = I>,
{
    transduce(&taking_while(pred), reducers::append(), Vec::new(), source)
}
