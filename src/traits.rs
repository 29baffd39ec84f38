use crate::error::{SieveError, SieveResult};

/// Default length of the sub-range sieved by one task. One chunk holds
/// `chunk_size / 2` bits of odd candidates plus its local prime list.
pub const DEFAULT_CHUNK_SIZE: u64 = 100_000_000;

/// Default number of times the sieve limit is doubled after an underestimate
pub const DEFAULT_MAX_RETRIES: usize = 4;

/// Configuration of the segmented sieve. None of the fields affects the
/// result, only memory usage and the granularity of parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveConfig {
    /// length of each chunk, must be positive and even
    pub chunk_size: u64,

    /// number of times the limit is doubled when it contains too few primes.
    /// Zero means an underestimate is reported immediately.
    pub max_retries: usize,

    /// number of worker threads. None means using the global rayon pool
    pub threads: Option<usize>,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
            threads: None,
        }
    }
}

impl SieveConfig {
    /// Create a configuration that sieves all chunks on a single worker
    pub fn sequential() -> Self {
        Self {
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Create a configuration with the given chunk size and default everything else
    pub fn with_chunk_size(chunk_size: u64) -> Self {
        Self {
            chunk_size,
            ..Self::default()
        }
    }

    /// Check the configuration before any work is done
    pub fn validate(&self) -> SieveResult<()> {
        if self.chunk_size == 0 || self.chunk_size % 2 == 1 {
            return Err(SieveError::InvalidChunkSize(self.chunk_size));
        }
        if let Some(0) = self.threads {
            return Err(SieveError::InvalidThreadCount);
        }
        Ok(())
    }
}

/// This trait describes a policy that picks the sieve domain for the n-th prime.
///
/// The returned `limit` should satisfy `pi(limit - 1) > n`, so that the
/// 0-indexed n-th prime lies in `[0, limit)`. Estimators are allowed to be
/// heuristic: the sieve detects an underestimate and retries with a doubled limit.
pub trait BoundEstimate {
    fn estimate(&self, n: u64) -> SieveResult<u64>;
}

impl<F> BoundEstimate for F
where
    F: Fn(u64) -> SieveResult<u64>,
{
    fn estimate(&self, n: u64) -> SieveResult<u64> {
        self(n)
    }
}
