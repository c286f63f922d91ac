//! Core traits for the transducer system.
//!
//! This module defines the fundamental abstractions: a [`Reducer`] is the
//! single-step contract every fold is driven through, a [`Transducer`] rewrites
//! one reducer into another, and a [`Consumer`] is the terminal sink of the
//! push driver. Both drivers share the same transformation vocabulary because
//! everything is expressed against [`Reducer::step`].

use crate::compose::Compose;
use crate::step::{Feed, Step};

/// A reducing operation: `(accumulator, input) -> accumulator`.
///
/// `step` either continues the fold with an updated accumulator or terminates
/// it early with [`Step::Done`]. The `&mut self` receiver carries state that is
/// private to one pipeline instance, such as the counter behind
/// [`taking`](crate::transducers::taking).
///
/// # Examples
///
/// ```rust
/// use transduce::step::Step;
/// use transduce::traits::Reducer;
///
/// struct Sum;
///
/// impl Reducer for Sum {
///     type Acc = i64;
///     type Input = i64;
///
///     fn step(&mut self, acc: i64, input: i64) -> Step<i64> {
///         Step::Continue(acc + input)
///     }
/// }
///
/// let total = transduce::drivers::fold(Sum, 0, 1..=4);
/// assert_eq!(total, 10);
/// ```
pub trait Reducer {
    /// The accumulator threaded through the fold.
    type Acc;
    /// The type of items this reducer accepts.
    type Input;

    /// Feed one input, producing the next accumulator or terminating the fold.
    fn step(&mut self, acc: Self::Acc, input: Self::Input) -> Step<Self::Acc>;
}

/// A reduction transformation: rewrites a downstream reducer into a new
/// reducer that performs one additional step (map, filter, take, ...).
///
/// A transducer value is immutable configuration. Each call to [`apply`]
/// allocates fresh per-pipeline state, so the same configured value can be
/// attached to any number of reducers — or appear twice in one pipeline — with
/// no shared mutable state between the attachments.
///
/// # Examples
///
/// ```rust
/// use transduce::drivers::transduce;
/// use transduce::reducers;
/// use transduce::transducers::mapping;
///
/// let doubled = mapping(|x: i64| x * 2);
/// let sum = transduce(&doubled, reducers::from_fn(|acc: i64, x: i64| acc + x), 0, 0..10);
/// assert_eq!(sum, 90);
/// ```
///
/// [`apply`]: Transducer::apply
pub trait Transducer {
    /// The type of items the transformed reducer accepts.
    type Input;
    /// The type of items forwarded to the downstream reducer.
    type Output;
    /// The reducer produced by attaching this transducer to `R`.
    type Step<R>: Reducer<Acc = R::Acc, Input = Self::Input>
    where
        R: Reducer<Input = Self::Output>;

    /// Wrap `downstream`, yielding the reducer for this stage.
    fn apply<R>(&self, downstream: R) -> Self::Step<R>
    where
        R: Reducer<Input = Self::Output>;
}

/// A terminal sink for the push driver: receives one value at a time.
///
/// Returning [`Feed::Stop`] closes the pipeline from the sink side; the
/// delivering loop stops without treating it as a failure.
///
/// # Examples
///
/// ```rust
/// use transduce::step::Feed;
/// use transduce::traits::Consumer;
///
/// struct Printer;
///
/// impl Consumer for Printer {
///     type Item = String;
///
///     fn consume(&mut self, item: String) -> Feed {
///         println!("got {item}");
///         Feed::Continue
///     }
/// }
/// ```
pub trait Consumer {
    /// The type of items this consumer accepts.
    type Item;

    /// Receive the next value.
    fn consume(&mut self, item: Self::Item) -> Feed;
}

/// Extension trait for building pipelines incrementally.
pub trait TransducerExt: Transducer + Sized {
    /// Chain `next` after this stage: `self` sees raw input first and forwards
    /// its output to `next`.
    ///
    /// Chaining is associative, so `a.then(b).then(c)` and `a.then(b.then(c))`
    /// describe the same pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transduce::prelude::*;
    ///
    /// let evens = filtering(|x: &i64| x % 2 == 0);
    /// let squared = evens.then(mapping(|x: i64| x * x));
    /// let out = transduce(&squared, reducers::append(), Vec::new(), 0..6);
    /// assert_eq!(out, vec![0, 4, 16]);
    /// ```
    fn then<T>(self, next: T) -> Compose<Self, T>
    where
        T: Transducer<Input = Self::Output>,
    {
        Compose::new(self, next)
    }
}

impl<X: Transducer> TransducerExt for X {}
