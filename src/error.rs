//! Error types for pipeline construction and driving.
//!
//! Only configuration mistakes are errors. Early termination of a fold is
//! control flow, fully absorbed by the drivers, and panics raised by
//! user-supplied closures propagate unchanged with no wrapping.

use thiserror::Error;

/// The error type for pipeline construction and driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A runtime pipeline was composed from zero transducers.
    #[error("cannot compose a pipeline from zero transducers")]
    InvalidComposition,

    /// A fold without an initial accumulator was driven over an empty sequence.
    #[error("cannot fold an empty sequence without an initial accumulator")]
    EmptyInput,
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, Error>;
