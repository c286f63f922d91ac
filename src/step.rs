//! Single-step outcomes shared by the pull and push drivers.

/// The outcome of feeding one input through a reducer.
///
/// `Done` is the termination signal: it carries the accumulator that is final
/// at the instant a stage decided no further input should be processed.
/// Intermediate stages must pass a `Done` through unchanged; only the driver
/// that owns the fold converts it back into a normal return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A> {
    /// Keep feeding input; the fold continues with this accumulator.
    Continue(A),
    /// Stop the fold now; this accumulator is the final result.
    Done(A),
}

impl<A> Step<A> {
    /// Extract the accumulator, whether or not the fold terminated.
    pub fn into_inner(self) -> A {
        match self {
            Step::Continue(acc) | Step::Done(acc) => acc,
        }
    }

    /// True if this step terminated the fold.
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// Whether a push pipeline is still accepting input.
///
/// Returned by [`Consumer::consume`](crate::traits::Consumer::consume) and by
/// [`PushPipeline::push`](crate::drivers::PushPipeline::push). Once a stage
/// answers `Stop`, the delivery loop must end; values the source already
/// committed to delivering cannot be un-pulled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// The pipeline accepted the value and wants more.
    Continue,
    /// The pipeline is closed; deliver nothing further.
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_inner() {
        assert_eq!(Step::Continue(3).into_inner(), 3);
        assert_eq!(Step::Done(7).into_inner(), 7);
    }

    #[test]
    fn test_is_done() {
        assert!(!Step::Continue(0).is_done());
        assert!(Step::Done(0).is_done());
    }
}
