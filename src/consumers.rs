//! Terminal consumers for the push driver.

use std::marker::PhantomData;

use crate::step::{Feed, Step};
use crate::traits::{Consumer, Reducer};

/// A consumer that appends every received value to a borrowed vector.
///
/// # Examples
///
/// ```rust
/// use transduce::consumers::Collect;
/// use transduce::drivers::{consume, push_pipeline};
/// use transduce::transducers::mapping;
///
/// let mut out = Vec::new();
/// let mut pipeline = push_pipeline(&mapping(|x: i32| x * 2), Collect::new(&mut out));
/// consume(&mut pipeline, 0..5);
/// drop(pipeline);
/// assert_eq!(out, vec![0, 2, 4, 6, 8]);
/// ```
pub struct Collect<'a, T> {
    items: &'a mut Vec<T>,
}

impl<'a, T> Collect<'a, T> {
    /// Collect into `items`, appending after any existing contents.
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Consumer for Collect<'_, T> {
    type Item = T;

    fn consume(&mut self, item: T) -> Feed {
        self.items.push(item);
        Feed::Continue
    }
}

/// Create a consumer that invokes a closure for every received value.
pub fn from_fn<F, T>(f: F) -> FnConsumer<F, T>
where
    F: FnMut(T),
{
    FnConsumer {
        f,
        _marker: PhantomData,
    }
}

/// Consumer returned by [`from_fn`].
pub struct FnConsumer<F, T> {
    f: F,
    _marker: PhantomData<fn(T)>,
}

impl<F, T> Consumer for FnConsumer<F, T>
where
    F: FnMut(T),
{
    type Item = T;

    fn consume(&mut self, item: T) -> Feed {
        (self.f)(item);
        Feed::Continue
    }
}

/// Adapt a consumer into a unit-accumulator reducer so the transformation
/// primitives can wrap it unchanged.
///
/// This is the bridge between the two drivers: a push pipeline is the same
/// composed reducer as a pull pipeline, stepped with `()` instead of a
/// threaded accumulator.
pub fn as_reducer<C: Consumer>(consumer: C) -> ConsumerReducer<C> {
    ConsumerReducer { consumer }
}

/// Reducer returned by [`as_reducer`].
pub struct ConsumerReducer<C> {
    consumer: C,
}

impl<C: Consumer> Reducer for ConsumerReducer<C> {
    type Acc = ();
    type Input = C::Item;

    fn step(&mut self, _acc: (), input: C::Item) -> Step<()> {
        match self.consumer.consume(input) {
            Feed::Continue => Step::Continue(()),
            Feed::Stop => Step::Done(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_appends() {
        let mut items = vec![9];
        let mut collect = Collect::new(&mut items);
        assert_eq!(collect.consume(1), Feed::Continue);
        assert_eq!(collect.consume(2), Feed::Continue);
        assert_eq!(items, vec![9, 1, 2]);
    }

    #[test]
    fn test_from_fn_sees_every_value() {
        let mut seen = 0;
        {
            let mut consumer = from_fn(|x: i32| seen += x);
            consumer.consume(1);
            consumer.consume(2);
        }
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_as_reducer_translates_stop() {
        struct OneShot(bool);
        impl Consumer for OneShot {
            type Item = i32;
            fn consume(&mut self, _item: i32) -> Feed {
                if self.0 {
                    Feed::Stop
                } else {
                    self.0 = true;
                    Feed::Continue
                }
            }
        }

        let mut reducer = as_reducer(OneShot(false));
        assert_eq!(reducer.step((), 1), Step::Continue(()));
        assert_eq!(reducer.step((), 2), Step::Done(()));
    }
}
