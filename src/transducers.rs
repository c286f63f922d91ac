//! Transformation primitives.
//!
//! Each factory takes configuration and returns an immutable transducer value.
//! Applying the value to a downstream reducer allocates any per-pipeline state
//! (such as the `taking` counter), so a single configured transducer can be
//! attached to any number of pipelines without sharing state between them.

use std::marker::PhantomData;

use crate::step::Step;
use crate::traits::{Reducer, Transducer};

/// Create a transducer that maps `f` over every input value.
///
/// `f` is called exactly once per input, in input order.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::mapping;
///
/// let sum = transduce(
///     &mapping(|x: i64| x * 2),
///     reducers::from_fn(|acc: i64, x: i64| acc + x),
///     0,
///     0..10,
/// );
/// assert_eq!(sum, (0..10).map(|x| x * 2).sum::<i64>());
/// ```
pub fn mapping<F, I, O>(f: F) -> Mapping<F, I, O>
where
    F: Fn(I) -> O + Clone,
{
    Mapping {
        f,
        _marker: PhantomData,
    }
}

/// Transducer returned by [`mapping`].
pub struct Mapping<F, I, O> {
    f: F,
    _marker: PhantomData<fn(I) -> O>,
}

impl<F: Clone, I, O> Clone for Mapping<F, I, O> {
    fn clone(&self) -> Self {
        Mapping {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I, O> Transducer for Mapping<F, I, O>
where
    F: Fn(I) -> O + Clone,
{
    type Input = I;
    type Output = O;
    type Step<R>
        = MapStep<F, R, I>
    where
        R: Reducer<Input = O>;

    fn apply<R>(&self, downstream: R) -> MapStep<F, R, I>
    where
        R: Reducer<Input = O>,
    {
        MapStep {
            f: self.f.clone(),
            downstream,
            _marker: PhantomData,
        }
    }
}

/// Reducer produced by attaching [`Mapping`] to a downstream reducer.
pub struct MapStep<F, R, I> {
    f: F,
    downstream: R,
    _marker: PhantomData<fn(I)>,
}

impl<F, R, I> Reducer for MapStep<F, R, I>
where
    F: Fn(I) -> R::Input,
    R: Reducer,
{
    type Acc = R::Acc;
    type Input = I;

    fn step(&mut self, acc: R::Acc, input: I) -> Step<R::Acc> {
        self.downstream.step(acc, (self.f)(input))
    }
}

/// Create a transducer that forwards only the inputs satisfying `pred`.
///
/// `pred` is evaluated exactly once per input, in input order; rejected inputs
/// never reach the downstream reducer.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::filtering;
///
/// let sum = transduce(
///     &filtering(|x: &i64| *x < 5),
///     reducers::from_fn(|acc: i64, x: i64| acc + x),
///     0,
///     0..10,
/// );
/// assert_eq!(sum, 0 + 1 + 2 + 3 + 4);
/// ```
pub fn filtering<F, I>(pred: F) -> Filtering<F, I>
where
    F: Fn(&I) -> bool + Clone,
{
    Filtering {
        pred,
        _marker: PhantomData,
    }
}

/// Transducer returned by [`filtering`].
pub struct Filtering<F, I> {
    pred: F,
    _marker: PhantomData<fn(I)>,
}

impl<F: Clone, I> Clone for Filtering<F, I> {
    fn clone(&self) -> Self {
        Filtering {
            pred: self.pred.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I> Transducer for Filtering<F, I>
where
    F: Fn(&I) -> bool + Clone,
{
    type Input = I;
    type Output = I;
    type Step<R>
        = FilterStep<F, R>
    where
        R: Reducer<Input = I>;

    fn apply<R>(&self, downstream: R) -> FilterStep<F, R>
    where
        R: Reducer<Input = I>,
    {
        FilterStep {
            pred: self.pred.clone(),
            downstream,
        }
    }
}

/// Reducer produced by attaching [`Filtering`] to a downstream reducer.
pub struct FilterStep<F, R> {
    pred: F,
    downstream: R,
}

impl<F, R> Reducer for FilterStep<F, R>
where
    F: Fn(&R::Input) -> bool,
    R: Reducer,
{
    type Acc = R::Acc;
    type Input = R::Input;

    fn step(&mut self, acc: R::Acc, input: R::Input) -> Step<R::Acc> {
        if (self.pred)(&input) {
            self.downstream.step(acc, input)
        } else {
            Step::Continue(acc)
        }
    }
}

/// Create a transducer that expands each input into a sequence of outputs.
///
/// The outputs of one expansion are fed downstream in order, folding left to
/// right, before the next input is considered. If the downstream reducer
/// terminates mid-expansion, the rest of the current expansion is discarded
/// and the termination propagates immediately.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::mapcatting;
///
/// let nested = vec![vec![3, 2, 1, 0], vec![6, 5, 4]];
/// let flat = transduce(
///     &mapcatting(|v: Vec<i32>| v.into_iter().rev()),
///     reducers::append(),
///     Vec::new(),
///     nested,
/// );
/// assert_eq!(flat, vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
pub fn mapcatting<F, I, T>(f: F) -> Mapcatting<F, I, T>
where
    F: Fn(I) -> T + Clone,
    T: IntoIterator,
{
    Mapcatting {
        f,
        _marker: PhantomData,
    }
}

/// Transducer returned by [`mapcatting`].
pub struct Mapcatting<F, I, T> {
    f: F,
    _marker: PhantomData<fn(I) -> T>,
}

impl<F: Clone, I, T> Clone for Mapcatting<F, I, T> {
    fn clone(&self) -> Self {
        Mapcatting {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I, T> Transducer for Mapcatting<F, I, T>
where
    F: Fn(I) -> T + Clone,
    T: IntoIterator,
{
    type Input = I;
    type Output = T::Item;
    type Step<R>
        = MapcatStep<F, R, I, T>
    where
        R: Reducer<Input = T::Item>;

    fn apply<R>(&self, downstream: R) -> MapcatStep<F, R, I, T>
    where
        R: Reducer<Input = T::Item>,
    {
        MapcatStep {
            f: self.f.clone(),
            downstream,
            _marker: PhantomData,
        }
    }
}

/// Reducer produced by attaching [`Mapcatting`] to a downstream reducer.
pub struct MapcatStep<F, R, I, T> {
    f: F,
    downstream: R,
    _marker: PhantomData<fn(I) -> T>,
}

impl<F, R, I, T> Reducer for MapcatStep<F, R, I, T>
where
    F: Fn(I) -> T,
    T: IntoIterator<Item = R::Input>,
    R: Reducer,
{
    type Acc = R::Acc;
    type Input = I;

    fn step(&mut self, acc: R::Acc, input: I) -> Step<R::Acc> {
        let mut acc = acc;
        for produced in (self.f)(input) {
            match self.downstream.step(acc, produced) {
                Step::Continue(next) => acc = next,
                done @ Step::Done(_) => return done,
            }
        }
        Step::Continue(acc)
    }
}

/// Create a transducer that forwards only the first `limit` input values.
///
/// The counter lives in the reducer produced by each application, never in the
/// transducer value itself, so one configured `taking` can appear in several
/// pipelines (or twice in the same pipeline) and each occurrence counts
/// independently.
///
/// Termination is signaled on the input that brings the count to `limit`,
/// carrying the accumulator that already includes that input; the upstream
/// source is never advanced past the satisfying element. A `limit` of zero is
/// legal and forwards nothing.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::taking;
///
/// let first = transduce(&taking(5), reducers::append(), Vec::new(), 0..1000);
/// assert_eq!(first, vec![0, 1, 2, 3, 4]);
/// ```
pub fn taking<T>(limit: usize) -> Taking<T> {
    Taking {
        limit,
        _marker: PhantomData,
    }
}

/// Transducer returned by [`taking`].
pub struct Taking<T> {
    limit: usize,
    _marker: PhantomData<fn(T)>,
}

impl<T> Clone for Taking<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Taking<T> {}

impl<T> Transducer for Taking<T> {
    type Input = T;
    type Output = T;
    type Step<R>
        = TakeStep<R>
    where
        R: Reducer<Input = T>;

    fn apply<R>(&self, downstream: R) -> TakeStep<R>
    where
        R: Reducer<Input = T>,
    {
        TakeStep {
            limit: self.limit,
            taken: 0,
            downstream,
        }
    }
}

/// Reducer produced by attaching [`Taking`] to a downstream reducer.
pub struct TakeStep<R> {
    limit: usize,
    taken: usize,
    downstream: R,
}

impl<R: Reducer> Reducer for TakeStep<R> {
    type Acc = R::Acc;
    type Input = R::Input;

    fn step(&mut self, acc: R::Acc, input: R::Input) -> Step<R::Acc> {
        if self.taken >= self.limit {
            // Reachable with a zero limit, or when a caller keeps stepping a
            // reducer that already answered Done.
            return Step::Done(acc);
        }
        self.taken += 1;
        let acc = match self.downstream.step(acc, input) {
            Step::Continue(acc) => acc,
            done @ Step::Done(_) => return done,
        };
        if self.taken == self.limit {
            Step::Done(acc)
        } else {
            Step::Continue(acc)
        }
    }
}

/// Create a transducer that forwards input while `pred` holds.
///
/// The first failing input terminates the fold immediately: it is not
/// forwarded, and nothing after it is consumed.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::taking_while;
///
/// let prefix = transduce(
///     &taking_while(|x: &i32| *x < 5),
///     reducers::append(),
///     Vec::new(),
///     0..1000,
/// );
/// assert_eq!(prefix, vec![0, 1, 2, 3, 4]);
/// ```
pub fn taking_while<F, I>(pred: F) -> TakingWhile<F, I>
where
    F: Fn(&I) -> bool + Clone,
{
    TakingWhile {
        pred,
        _marker: PhantomData,
    }
}

/// Transducer returned by [`taking_while`].
pub struct TakingWhile<F, I> {
    pred: F,
    _marker: PhantomData<fn(I)>,
}

impl<F: Clone, I> Clone for TakingWhile<F, I> {
    fn clone(&self) -> Self {
        TakingWhile {
            pred: self.pred.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I> Transducer for TakingWhile<F, I>
where
    F: Fn(&I) -> bool + Clone,
{
    type Input = I;
    type Output = I;
    type Step<R>
        = TakeWhileStep<F, R>
    where
        R: Reducer<Input = I>;

    fn apply<R>(&self, downstream: R) -> TakeWhileStep<F, R>
    where
        R: Reducer<Input = I>,
    {
        TakeWhileStep {
            pred: self.pred.clone(),
            downstream,
        }
    }
}

/// Reducer produced by attaching [`TakingWhile`] to a downstream reducer.
pub struct TakeWhileStep<F, R> {
    pred: F,
    downstream: R,
}

impl<F, R> Reducer for TakeWhileStep<F, R>
where
    F: Fn(&R::Input) -> bool,
    R: Reducer,
{
    type Acc = R::Acc;
    type Input = R::Input;

    fn step(&mut self, acc: R::Acc, input: R::Input) -> Step<R::Acc> {
        if (self.pred)(&input) {
            self.downstream.step(acc, input)
        } else {
            Step::Done(acc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::transduce;
    use crate::reducers;

    #[test]
    fn test_mapping() {
        let sum = transduce(
            &mapping(|x: i64| x * 2),
            reducers::from_fn(|acc: i64, x: i64| acc + x),
            0,
            0..10,
        );
        assert_eq!(sum, (0..10).map(|x| x * 2).sum::<i64>());
    }

    #[test]
    fn test_filtering() {
        let sum = transduce(
            &filtering(|x: &i64| *x < 10),
            reducers::from_fn(|acc: i64, x: i64| acc + x),
            0,
            0..100,
        );
        assert_eq!(sum, (0..10).sum::<i64>());
    }

    #[test]
    fn test_mapcatting() {
        let flat = transduce(
            &mapcatting(|v: Vec<i32>| v.into_iter().rev()),
            reducers::append(),
            Vec::new(),
            vec![vec![3, 2, 1, 0], vec![6, 5, 4]],
        );
        assert_eq!(flat, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_taking() {
        let sum = transduce(
            &taking(10),
            reducers::from_fn(|acc: i64, x: i64| acc + x),
            0,
            0..100,
        );
        assert_eq!(sum, (0..10).sum::<i64>());
    }

    #[test]
    fn test_taking_zero_forwards_nothing() {
        let out = transduce(&taking(0), reducers::append(), Vec::new(), 0..100);
        assert_eq!(out, Vec::<i32>::new());
    }

    #[test]
    fn test_taking_while() {
        let sum = transduce(
            &taking_while(|x: &i64| *x < 10),
            reducers::from_fn(|acc: i64, x: i64| acc + x),
            0,
            0..100,
        );
        assert_eq!(sum, (0..10).sum::<i64>());
    }

    #[test]
    fn test_taking_applications_are_independent() {
        let take = taking(3);
        let a = transduce(&take, reducers::append(), Vec::new(), 0..100);
        let b = transduce(&take, reducers::append(), Vec::new(), 0..100);
        assert_eq!(a, vec![0, 1, 2]);
        assert_eq!(b, vec![0, 1, 2]);
    }
}
