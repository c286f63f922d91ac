//! # Composable reduction transformations for Rust
//!
//! This crate provides transducers: transformation primitives (map, filter,
//! take, take-while, flat-map) expressed as rewrites of one reducing
//! operation into another, decoupled from the collection or iteration
//! strategy that eventually drives them. The same composed pipeline can be
//! driven by a pull-based fold over a finite sequence or by a push-based
//! source delivering values one at a time.
//!
//! ## Core Concepts
//!
//! - **Reducer**: a step function `(accumulator, input) -> accumulator`
//! - **Transducer**: rewrites a reducer into a new reducer with one extra step
//! - **Step**: the per-input outcome, including the early-termination signal
//! - **Drivers**: pull ([`drivers::fold`]) and push ([`drivers::consume`])
//!   execution of the same pipeline
//!
//! ## Example
//!
//! ```rust
//! use transduce::prelude::*;
//!
//! let pipeline = transduce::compose!(
//!     filtering(|x: &i64| x % 2 == 0),
//!     mapping(|x: i64| x * x),
//!     taking(3),
//! );
//!
//! // Pull: fold a source through the pipeline.
//! let squares = transduce(&pipeline, reducers::append(), Vec::new(), 0..100);
//! assert_eq!(squares, vec![0, 4, 16]);
//!
//! // Push: deliver values one at a time into the same pipeline.
//! let mut out = Vec::new();
//! let mut push = push_pipeline(&pipeline, consumers::Collect::new(&mut out));
//! let delivered = consume(&mut push, 0..100);
//! drop(push);
//! assert_eq!(out, vec![0, 4, 16]);
//! assert_eq!(delivered, 5); // stops on 4, the third even number
//! ```

pub mod compose;
pub mod consumers;
pub mod drivers;
pub mod eager;
pub mod error;
pub mod reducers;
pub mod step;
pub mod traits;
pub mod transducers;

// Re-export commonly used items
pub mod prelude {
    pub use crate::compose::{BoxedReducer, BoxedTransducer, Compose};
    pub use crate::consumers;
    pub use crate::drivers::{consume, fold, fold_first, push_pipeline, transduce, PushPipeline};
    pub use crate::error::{Error, Result};
    pub use crate::reducers;
    pub use crate::step::{Feed, Step};
    pub use crate::traits::{Consumer, Reducer, Transducer, TransducerExt};
    pub use crate::transducers::{filtering, mapcatting, mapping, taking, taking_while};
}

// Re-export main error type
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
