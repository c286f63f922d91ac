//! Pipeline composition.
//!
//! [`Compose`] chains two stages statically; the [`compose!`] macro nests any
//! number of stages; [`BoxedTransducer`] erases stage types so pipelines can
//! be assembled at run time from an ordered sequence.
//!
//! In every form the first stage listed is the outermost wrapper: it sees raw
//! input first and forwards its output to the next stage, terminating in the
//! caller-supplied terminal reducer.

use crate::error::{Error, Result};
use crate::step::Step;
use crate::traits::{Reducer, Transducer};

/// Two transducers chained into one: `outer` sees raw input first and feeds
/// `inner`, which wraps the terminal reducer.
///
/// Built with [`Compose::new`], [`TransducerExt::then`] or the [`compose!`]
/// macro. Composition is associative: grouping does not change behavior.
///
/// [`TransducerExt::then`]: crate::traits::TransducerExt::then
#[derive(Clone)]
pub struct Compose<A, B> {
    outer: A,
    inner: B,
}

impl<A, B> Compose<A, B> {
    /// Chain `outer` before `inner`.
    pub fn new(outer: A, inner: B) -> Self {
        Self { outer, inner }
    }
}

impl<A, B> Transducer for Compose<A, B>
where
    A: Transducer,
    B: Transducer<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Step<R>
        = A::Step<B::Step<R>>
    where
        R: Reducer<Input = B::Output>;

    fn apply<R>(&self, downstream: R) -> Self::Step<R>
    where
        R: Reducer<Input = B::Output>,
    {
        self.outer.apply(self.inner.apply(downstream))
    }
}

/// Compose an ordered sequence of transducers into a single transducer.
///
/// `compose!(t1, t2, ..., tk)` applied to a terminal reducer `r` is
/// `t1(t2(...(tk(r))))`: `t1` is the outermost wrapper and processes raw
/// input first at run time. Composing zero transducers is rejected at compile
/// time; for pipelines assembled at run time see
/// [`BoxedTransducer::compose`], which reports the same condition as
/// [`Error::InvalidComposition`].
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::{filtering, mapping};
///
/// let pipeline = transduce::compose!(
///     filtering(|x: &i64| x % 2 == 0),
///     mapping(|x: i64| x * 10),
/// );
/// let out = transduce(&pipeline, reducers::append(), Vec::new(), 0..6);
/// assert_eq!(out, vec![0, 20, 40]);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        compile_error!("compose! requires at least one transducer")
    };
    ($t:expr $(,)?) => {
        $t
    };
    ($t:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::Compose::new($t, $crate::compose!($($rest),+))
    };
}

/// A reducer with its concrete type erased behind a boxed closure.
///
/// Produced by [`BoxedTransducer::apply`]; usable anywhere a [`Reducer`] is.
pub struct BoxedReducer<'a, A, I> {
    step: Box<dyn FnMut(A, I) -> Step<A> + 'a>,
}

impl<'a, A, I> Reducer for BoxedReducer<'a, A, I> {
    type Acc = A;
    type Input = I;

    fn step(&mut self, acc: A, input: I) -> Step<A> {
        (self.step)(acc, input)
    }
}

/// A transducer with its stage type erased, for pipelines assembled at run
/// time.
///
/// Erasure fixes the accumulator type `A` and requires each stage to accept
/// and forward the same item type `T`; heterogeneous pipelines stay in the
/// statically typed [`compose!`] form.
///
/// # Examples
///
/// ```rust
/// use transduce::compose::BoxedTransducer;
/// use transduce::drivers::fold;
/// use transduce::reducers;
/// use transduce::transducers::{filtering, mapping, taking};
///
/// let stages = vec![
///     BoxedTransducer::new(filtering(|x: &i64| x % 2 == 0)),
///     BoxedTransducer::new(mapping(|x: i64| x + 1)),
///     BoxedTransducer::new(taking(3)),
/// ];
/// let pipeline = BoxedTransducer::compose(stages)?;
/// let out = fold(pipeline.apply(reducers::append()), Vec::new(), 0..100);
/// assert_eq!(out, vec![1, 3, 5]);
/// # Ok::<(), transduce::Error>(())
/// ```
pub struct BoxedTransducer<'a, A, T> {
    attach: Box<dyn Fn(BoxedReducer<'a, A, T>) -> BoxedReducer<'a, A, T> + 'a>,
}

impl<'a, A: 'a, T: 'a> BoxedTransducer<'a, A, T> {
    /// Erase `stage` behind boxed closures.
    pub fn new<X>(stage: X) -> Self
    where
        X: Transducer<Input = T, Output = T> + 'a,
        X::Step<BoxedReducer<'a, A, T>>: 'a,
    {
        BoxedTransducer {
            attach: Box::new(move |downstream| {
                let mut step: X::Step<BoxedReducer<'a, A, T>> = stage.apply(downstream);
                BoxedReducer {
                    step: Box::new(move |acc, input| step.step(acc, input)),
                }
            }),
        }
    }

    /// Compose an ordered sequence of stages into one; the first stage listed
    /// sees raw input first.
    ///
    /// Fails with [`Error::InvalidComposition`] when `stages` is empty — an
    /// empty pipeline has no way to connect input to a terminal reducer.
    pub fn compose<S>(stages: S) -> Result<Self>
    where
        S: IntoIterator<Item = Self>,
    {
        let stages: Vec<Self> = stages.into_iter().collect();
        if stages.is_empty() {
            return Err(Error::InvalidComposition);
        }
        Ok(BoxedTransducer {
            attach: Box::new(move |terminal| {
                stages
                    .iter()
                    .rev()
                    .fold(terminal, |downstream, stage| (stage.attach)(downstream))
            }),
        })
    }

    /// Wrap a terminal reducer, yielding the reducer for the whole chain.
    pub fn apply<R>(&self, downstream: R) -> BoxedReducer<'a, A, T>
    where
        R: Reducer<Acc = A, Input = T> + 'a,
    {
        let mut downstream = downstream;
        let terminal = BoxedReducer {
            step: Box::new(move |acc, input| downstream.step(acc, input)),
        };
        (self.attach)(terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{fold, transduce};
    use crate::reducers;
    use crate::traits::TransducerExt;
    use crate::transducers::{filtering, mapping, taking};

    #[test]
    fn test_first_stage_sees_raw_input() {
        // Filter raw input before mapping; mapping the other way around would
        // keep different elements.
        let pipeline = crate::compose!(filtering(|x: &i64| *x < 5), mapping(|x: i64| x * 2));
        let product = transduce(
            &pipeline,
            reducers::from_fn(|acc: i64, x: i64| acc * x),
            1,
            1..10,
        );
        let expected: i64 = (1..10).filter(|x| *x < 5).map(|x| x * 2).product();
        assert_eq!(product, expected);
    }

    #[test]
    fn test_then_matches_macro_grouping() {
        let nested = crate::compose!(
            filtering(|x: &i64| x % 3 == 0),
            mapping(|x: i64| x + 1),
            taking(4),
        );
        let incremental = filtering(|x: &i64| x % 3 == 0)
            .then(mapping(|x: i64| x + 1))
            .then(taking(4));

        let a = transduce(&nested, reducers::append(), Vec::new(), 0..100);
        let b = transduce(&incremental, reducers::append(), Vec::new(), 0..100);
        assert_eq!(a, b);
        assert_eq!(a, vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_boxed_compose_empty_is_an_error() {
        let empty: Vec<BoxedTransducer<'static, Vec<i64>, i64>> = Vec::new();
        assert_eq!(
            BoxedTransducer::compose(empty).err(),
            Some(Error::InvalidComposition)
        );
    }

    #[test]
    fn test_boxed_compose_preserves_order() {
        let stages = vec![
            BoxedTransducer::new(filtering(|x: &i64| x % 2 == 0)),
            BoxedTransducer::new(mapping(|x: i64| x + 1)),
        ];
        let pipeline = BoxedTransducer::compose(stages).unwrap();
        let out = fold(pipeline.apply(reducers::append()), Vec::new(), 0..6);
        assert_eq!(out, vec![1, 3, 5]);
    }

    #[test]
    fn test_boxed_pipeline_reusable() {
        let pipeline = BoxedTransducer::compose(vec![BoxedTransducer::new(taking(2))]).unwrap();
        let a = fold(pipeline.apply(reducers::append()), Vec::new(), 0..10);
        let b = fold(pipeline.apply(reducers::append()), Vec::new(), 0..10);
        assert_eq!(a, vec![0, 1]);
        assert_eq!(b, vec![0, 1]);
    }
}
