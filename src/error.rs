//! Error types of the n-th prime search

use thiserror::Error;

/// Errors that can occur while searching for the n-th prime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    /// The requested position is negative.
    #[error("invalid argument: n must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// The sieve domain held too few primes, even after the allowed retries.
    #[error("bound underestimate: [0, {limit}) contains {found} primes, need more than {n}")]
    BoundUnderestimate { n: u64, limit: u64, found: u64 },

    /// A bound or an index does not fit in the 64-bit integer domain.
    #[error("arithmetic overflow while computing {what}")]
    ArithmeticOverflow { what: &'static str },

    /// The base primes do not reach the square root of the sieved range.
    #[error("base primes up to {bound} cannot sieve values below {end}")]
    InsufficientBasePrimes { bound: u64, end: u64 },

    /// Chunk sizes must be positive and even.
    #[error("invalid chunk size {0}: must be positive and even")]
    InvalidChunkSize(u64),

    #[error("invalid thread count: must be at least 1")]
    InvalidThreadCount,

    /// The dedicated worker pool could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result type for sieve operations.
pub type SieveResult<T> = Result<T, SieveError>;
