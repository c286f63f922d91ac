//! Drivers that feed input through a composed pipeline.
//!
//! Two equivalent execution strategies share one transformation vocabulary:
//! the pull driver ([`fold`], [`fold_first`], [`transduce`]) repeatedly pulls
//! the next input from a sequence, while the push driver ([`PushPipeline`],
//! [`consume`]) has an external source deliver one value at a time. Early
//! termination is absorbed here, exactly at the fold or delivery boundary,
//! and is never visible to callers as a failure.

use crate::consumers;
use crate::error::{Error, Result};
use crate::step::{Feed, Step};
use crate::traits::{Consumer, Reducer, Transducer};

/// Left-fold `source` through `reducer`, starting from `init`.
///
/// Stops when the source is exhausted (returning the accumulator) or when a
/// stage terminates the fold (returning the carried value), whichever happens
/// first. The next element is pulled only after the previous one continued
/// the fold, so a source is never advanced past the element whose processing
/// terminated it.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::fold;
/// use transduce::reducers;
///
/// let sum = fold(reducers::from_fn(|acc: i64, x: i64| acc + x), 0, 1..=100);
/// assert_eq!(sum, 5050);
/// ```
pub fn fold<R, S>(mut reducer: R, init: R::Acc, source: S) -> R::Acc
where
    R: Reducer,
    S: IntoIterator<Item = R::Input>,
{
    let mut acc = init;
    for input in source {
        match reducer.step(acc, input) {
            Step::Continue(next) => acc = next,
            Step::Done(fin) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("fold terminated early by a pipeline stage");
                return fin;
            }
        }
    }
    acc
}

/// Left-fold `source` through `reducer`, deriving the initial accumulator
/// from the first element.
///
/// Fails with [`Error::EmptyInput`] on an empty source: with no initial
/// accumulator supplied there is nothing to return.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::fold_first;
/// use transduce::reducers;
/// use transduce::Error;
///
/// let sum = fold_first(reducers::from_fn(|acc: i64, x: i64| acc + x), 1..=4);
/// assert_eq!(sum, Ok(10));
///
/// let empty = fold_first(reducers::from_fn(|acc: i64, x: i64| acc + x), 1..1);
/// assert_eq!(empty, Err(Error::EmptyInput));
/// ```
pub fn fold_first<R, S>(reducer: R, source: S) -> Result<R::Acc>
where
    R: Reducer,
    R::Acc: From<R::Input>,
    S: IntoIterator<Item = R::Input>,
{
    let mut iter = source.into_iter();
    let Some(first) = iter.next() else {
        return Err(Error::EmptyInput);
    };
    Ok(fold(reducer, R::Acc::from(first), iter))
}

/// Attach `xform` to a terminal reducer and fold `source` through the result.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::filtering;
///
/// let evens = transduce(
///     &filtering(|x: &i64| x % 2 == 0),
///     reducers::append(),
///     Vec::new(),
///     0..7,
/// );
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
pub fn transduce<X, R, S>(xform: &X, sink: R, init: R::Acc, source: S) -> R::Acc
where
    X: Transducer,
    R: Reducer<Input = X::Output>,
    S: IntoIterator<Item = X::Input>,
{
    fold(xform.apply(sink), init, source)
}

/// A pipeline driven by pushing one value at a time into its head.
///
/// Internally this is the same composed reducer the pull driver uses, stepped
/// with a unit accumulator; each stage reacts to a delivery by forwarding
/// zero, one, or many values downstream. Once any stage terminates, the
/// pipeline closes and every later push reports [`Feed::Stop`] without
/// touching the stages again.
pub struct PushPipeline<R> {
    reducer: R,
    open: bool,
}

impl<R> PushPipeline<R>
where
    R: Reducer<Acc = ()>,
{
    /// Wrap an already-composed unit-accumulator reducer.
    pub fn new(reducer: R) -> Self {
        Self {
            reducer,
            open: true,
        }
    }

    /// Deliver one value into the head of the pipeline.
    pub fn push(&mut self, input: R::Input) -> Feed {
        if !self.open {
            return Feed::Stop;
        }
        match self.reducer.step((), input) {
            Step::Continue(()) => Feed::Continue,
            Step::Done(()) => {
                self.open = false;
                Feed::Stop
            }
        }
    }

    /// True until a stage has terminated the pipeline.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Build a push pipeline by attaching `xform` to a terminal consumer.
///
/// # Examples
///
/// ```rust
/// use transduce::consumers::Collect;
/// use transduce::drivers::{consume, push_pipeline};
/// use transduce::transducers::taking;
///
/// let mut out = Vec::new();
/// let mut pipeline = push_pipeline(&taking(5), Collect::new(&mut out));
/// let delivered = consume(&mut pipeline, 0..1000);
/// assert_eq!(delivered, 5);
/// drop(pipeline);
/// assert_eq!(out, vec![0, 1, 2, 3, 4]);
/// ```
pub fn push_pipeline<X, C>(
    xform: &X,
    consumer: C,
) -> PushPipeline<X::Step<consumers::ConsumerReducer<C>>>
where
    X: Transducer,
    C: Consumer<Item = X::Output>,
{
    PushPipeline::new(xform.apply(consumers::as_reducer(consumer)))
}

/// Deliver consecutive values from `source` into `pipeline` until the source
/// is exhausted or the pipeline stops accepting input.
///
/// Termination is caught here, at the point where delivery started, and is
/// not surfaced to the caller. Returns the number of values drawn from the
/// source, including the value whose delivery triggered termination: unlike
/// the pull driver, this loop cannot un-pull a value the source already
/// committed to delivering.
pub fn consume<R, S>(pipeline: &mut PushPipeline<R>, source: S) -> usize
where
    R: Reducer<Acc = ()>,
    S: IntoIterator<Item = R::Input>,
{
    let mut delivered = 0;
    let mut iter = source.into_iter();
    while pipeline.is_open() {
        let Some(value) = iter.next() else {
            break;
        };
        delivered += 1;
        if pipeline.push(value) == Feed::Stop {
            #[cfg(feature = "tracing")]
            tracing::trace!(delivered, "push delivery stopped by the pipeline");
            break;
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consumers::Collect;
    use crate::reducers;
    use crate::transducers::{mapping, taking_while};

    #[test]
    fn test_fold_empty_returns_init() {
        let init = vec![42];
        let out = fold(reducers::append(), init.clone(), std::iter::empty::<i32>());
        assert_eq!(out, init);
    }

    #[test]
    fn test_fold_stops_at_done() {
        let sum = fold(
            reducers::from_step(|acc: i64, x: i64| {
                if x >= 3 {
                    Step::Done(acc)
                } else {
                    Step::Continue(acc + x)
                }
            }),
            0,
            0..100,
        );
        assert_eq!(sum, 0 + 1 + 2);
    }

    #[test]
    fn test_push_after_stop_is_inert() {
        let mut out = Vec::new();
        let mut pipeline = push_pipeline(&taking_while(|x: &i32| *x < 2), Collect::new(&mut out));
        assert_eq!(pipeline.push(0), Feed::Continue);
        assert_eq!(pipeline.push(1), Feed::Continue);
        assert_eq!(pipeline.push(2), Feed::Stop);
        assert_eq!(pipeline.push(0), Feed::Stop);
        assert!(!pipeline.is_open());
        drop(pipeline);
        assert_eq!(out, vec![0, 1]);
    }

    #[test]
    fn test_consume_exhausts_short_source() {
        let mut out = Vec::new();
        let mut pipeline = push_pipeline(&mapping(|x: i32| x + 1), Collect::new(&mut out));
        let delivered = consume(&mut pipeline, 0..3);
        assert_eq!(delivered, 3);
        assert!(pipeline.is_open());
        drop(pipeline);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_consume_on_closed_pipeline_draws_nothing() {
        let mut out = Vec::new();
        let mut pipeline = push_pipeline(&taking_while(|x: &i32| *x < 0), Collect::new(&mut out));
        assert_eq!(consume(&mut pipeline, 0..10), 1);
        assert_eq!(consume(&mut pipeline, 0..10), 0);
    }
}
