//! Error types for random value generation.

use thiserror::Error;

/// Errors that can occur while generating values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A requested string length does not fit inside the seed pool.
    ///
    /// Pooled strings are served as slices of the pool at a random offset,
    /// so the requested length must be strictly smaller than the pool size.
    #[error("requested string length {requested} does not fit in seed pool of size {pool_size}")]
    StringTooLong {
        /// The length that was asked for.
        requested: usize,
        /// The size of the pool it had to fit into.
        pool_size: usize,
    },
}
