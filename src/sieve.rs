//! Segmented sieve driver: fans chunks out to rayon workers, joins them in order and
//! selects the n-th prime from the aggregate.

use crate::bound::HeuristicBound;
use crate::buffer::BasePrimes;
use crate::error::{SieveError, SieveResult};
use crate::segment::partition;
use crate::traits::{BoundEstimate, SieveConfig};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, trace, warn};

/// All primes below a limit, kept as the per-chunk lists in chunk order.
///
/// Logically this is the concatenation of the lists, which is the ascending
/// sequence of primes in [0, limit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSegments {
    limit: u64,
    segments: Vec<Vec<u64>>,
    len: u64,
}

impl PrimeSegments {
    fn new(limit: u64, segments: Vec<Vec<u64>>) -> Self {
        let len = segments.iter().map(|s| s.len() as u64).sum();
        PrimeSegments { limit, segments, len }
    }

    /// The exclusive upper end of the sieved domain
    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of primes below the limit
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The prime lists of each chunk, in chunk order
    pub fn segments(&self) -> &[Vec<u64>] {
        &self.segments
    }

    /// Return the prime at 0-indexed position n, or None if there are not enough primes
    pub fn get(&self, n: u64) -> Option<u64> {
        let mut rest = n;
        for segment in &self.segments {
            let len = segment.len() as u64;
            if rest < len {
                return Some(segment[rest as usize]);
            }
            rest -= len;
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.segments.iter().flatten().copied()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.segments.into_iter().flatten().collect()
    }
}

/// Finds the n-th prime by sieving a heuristically bounded domain in parallel chunks.
///
/// When the domain turns out to hold too few primes, the limit is doubled and the
/// domain is sieved again, at most `config.max_retries` times.
#[derive(Debug, Clone)]
pub struct NthPrimeSieve<E = HeuristicBound> {
    config: SieveConfig,
    estimator: E,
}

impl NthPrimeSieve<HeuristicBound> {
    pub fn new(config: SieveConfig) -> Self {
        Self::with_estimator(config, HeuristicBound)
    }
}

impl Default for NthPrimeSieve<HeuristicBound> {
    fn default() -> Self {
        Self::new(SieveConfig::default())
    }
}

impl<E: BoundEstimate> NthPrimeSieve<E> {
    pub fn with_estimator(config: SieveConfig, estimator: E) -> Self {
        NthPrimeSieve { config, estimator }
    }

    #[inline]
    pub fn config(&self) -> &SieveConfig {
        &self.config
    }

    /// Return the prime at 0-indexed position n
    pub fn nth_prime(&self, n: u64) -> SieveResult<u64> {
        self.config.validate()?;

        let mut limit = self.estimator.estimate(n)?;
        let mut retries = 0;
        loop {
            let primes = self.sieve(limit)?;
            if let Some(p) = primes.get(n) {
                return Ok(p);
            }

            if retries >= self.config.max_retries {
                return Err(SieveError::BoundUnderestimate {
                    n,
                    limit,
                    found: primes.len(),
                });
            }
            retries += 1;

            let next = limit.max(1).checked_mul(2).ok_or(SieveError::ArithmeticOverflow {
                what: "the doubled sieve limit",
            })?;
            warn!(
                n,
                limit,
                found = primes.len(),
                next,
                retry = retries,
                "sieve limit underestimated, doubling"
            );
            limit = next;
        }
    }

    /// Sieve the domain [0, limit) and return all primes in it.
    ///
    /// Base primes are generated first and then shared read-only by all chunk tasks.
    /// The call blocks until every chunk is sieved.
    pub fn sieve(&self, limit: u64) -> SieveResult<PrimeSegments> {
        self.config.validate()?;

        let base = BasePrimes::for_limit(limit)?;
        let chunks = partition(limit, self.config.chunk_size)?;
        debug!(
            limit,
            base_primes = base.len(),
            chunks = chunks.len(),
            chunk_size = self.config.chunk_size,
            "sieving domain"
        );

        // collect() on an indexed parallel iterator keeps the chunk order
        let run = || {
            chunks
                .par_iter()
                .map(|chunk| -> SieveResult<Vec<u64>> {
                    let primes = chunk.sieve(&base)?;
                    trace!(index = chunk.index, start = chunk.start, found = primes.len(), "chunk done");
                    Ok(primes)
                })
                .collect::<SieveResult<Vec<_>>>()
        };

        let segments = match self.config.threads {
            None => run()?,
            Some(threads) => ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| SieveError::ThreadPool(e.to_string()))?
                .install(run)?,
        };
        Ok(PrimeSegments::new(limit, segments))
    }
}
