//! Terminal reducers for the pull driver.

use std::marker::PhantomData;

use crate::step::Step;
use crate::traits::Reducer;

/// Create a reducer from a plain `(accumulator, input) -> accumulator`
/// closure. The resulting reducer never terminates the fold on its own.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::fold;
/// use transduce::reducers;
///
/// let sum = fold(reducers::from_fn(|acc: i64, x: i64| acc + x), 0, 1..=4);
/// assert_eq!(sum, 10);
/// ```
pub fn from_fn<F, A, I>(f: F) -> FromFn<F, A, I>
where
    F: FnMut(A, I) -> A,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

/// Reducer returned by [`from_fn`].
pub struct FromFn<F, A, I> {
    f: F,
    _marker: PhantomData<fn(A, I) -> A>,
}

impl<F, A, I> Reducer for FromFn<F, A, I>
where
    F: FnMut(A, I) -> A,
{
    type Acc = A;
    type Input = I;

    fn step(&mut self, acc: A, input: I) -> Step<A> {
        Step::Continue((self.f)(acc, input))
    }
}

/// Create a reducer from a closure with full control over the step outcome,
/// including terminating the fold with [`Step::Done`].
pub fn from_step<F, A, I>(f: F) -> FromStep<F, A, I>
where
    F: FnMut(A, I) -> Step<A>,
{
    FromStep {
        f,
        _marker: PhantomData,
    }
}

/// Reducer returned by [`from_step`].
pub struct FromStep<F, A, I> {
    f: F,
    _marker: PhantomData<fn(A, I) -> A>,
}

impl<F, A, I> Reducer for FromStep<F, A, I>
where
    F: FnMut(A, I) -> Step<A>,
{
    type Acc = A;
    type Input = I;

    fn step(&mut self, acc: A, input: I) -> Step<A> {
        (self.f)(acc, input)
    }
}

/// Create a reducer that appends every input to a `Vec` accumulator.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::fold;
/// use transduce::reducers;
///
/// let items = fold(reducers::append(), Vec::new(), "ab".chars());
/// assert_eq!(items, vec!['a', 'b']);
/// ```
pub fn append<T>() -> Append<T> {
    Append(PhantomData)
}

/// Reducer returned by [`append`].
pub struct Append<T>(PhantomData<fn(T)>);

impl<T> Reducer for Append<T> {
    type Acc = Vec<T>;
    type Input = T;

    fn step(&mut self, mut acc: Vec<T>, input: T) -> Step<Vec<T>> {
        acc.push(input);
        Step::Continue(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::fold;

    #[test]
    fn test_from_step_can_terminate() {
        let capped = from_step(|acc: i64, x: i64| {
            let acc = acc + x;
            if acc >= 10 {
                Step::Done(acc)
            } else {
                Step::Continue(acc)
            }
        });
        assert_eq!(fold(capped, 0, 1..100), 10);
    }

    #[test]
    fn test_append_keeps_order() {
        let items = fold(append(), Vec::new(), [3, 1, 2]);
        assert_eq!(items, vec![3, 1, 2]);
    }
}
