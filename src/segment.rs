//! Partition of the sieve domain into chunks, and the sieve of a single chunk

use crate::buffer::BasePrimes;
use crate::error::{SieveError, SieveResult};
use bitvec::bitvec;
use num_integer::Integer;
use std::convert::TryFrom;

/// A contiguous sub-range `[start, start + size)` of the sieve domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    pub index: usize,
    pub start: u64,
    pub size: u64,
}

/// Split [0, limit) into `ceil(limit / chunk_size)` disjoint chunks covering the whole range.
///
/// The chunk size must be positive and even, so that every chunk starts at an even value.
/// The last chunk is shortened to end exactly at `limit`.
pub fn partition(limit: u64, chunk_size: u64) -> SieveResult<Vec<Chunk>> {
    if chunk_size == 0 || chunk_size.is_odd() {
        return Err(SieveError::InvalidChunkSize(chunk_size));
    }
    // a chunk keeps one bit per odd candidate in memory
    if usize::try_from(chunk_size / 2).is_err() {
        return Err(SieveError::ArithmeticOverflow { what: "the chunk size" });
    }

    let count = usize::try_from(Integer::div_ceil(&limit, &chunk_size))
        .map_err(|_| SieveError::ArithmeticOverflow { what: "the chunk count" })?;
    Ok((0..count)
        .map(|index| {
            let start = index as u64 * chunk_size;
            Chunk {
                index,
                start,
                size: chunk_size.min(limit - start),
            }
        })
        .collect())
}

impl Chunk {
    /// The exclusive end of the chunk
    #[inline]
    pub fn end(&self) -> u64 {
        self.start + self.size
    }

    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value < self.end()
    }

    /// Return all primes in this chunk in ascending order. The chunk holding 2
    /// (the first one, unless chunks are only two wide) prepends it to its odd primes.
    ///
    /// `base` must contain every prime up to the square root of the chunk end, i.e. be built
    /// by [BasePrimes::for_limit()] with a limit not smaller than [Chunk::end()]. Otherwise
    /// [SieveError::InsufficientBasePrimes] is returned.
    pub fn sieve(&self, base: &BasePrimes) -> SieveResult<Vec<u64>> {
        debug_assert!(self.start.is_even());
        let (start, end) = (self.start, self.end());
        if base.bound() <= num_integer::sqrt(end.saturating_sub(1)) {
            return Err(SieveError::InsufficientBasePrimes {
                bound: base.bound(),
                end,
            });
        }

        // bit i represents the odd number start+2i+1, set bits are composites
        let mut sieve = bitvec![0; (self.size / 2) as usize];
        if start == 0 && !sieve.is_empty() {
            sieve.set(0, true); // 1 is not a prime
        }

        for &p in base.iter().skip_while(|&&p| p < 3) {
            // skip pre-filtered 2
            let p2 = p * p;
            if p2 >= end {
                break;
            }
            let mut first = p2.max(Integer::div_ceil(&start, &p).saturating_mul(p));
            if first.is_even() {
                first = first.saturating_add(p); // start from an odd multiple
            }
            for multi in (first..end).step_by(2 * p as usize) {
                sieve.set(((multi - start - 1) / 2) as usize, true);
            }
        }

        let mut primes = Vec::with_capacity(sieve.count_zeros() + 1);
        if self.contains(2) {
            primes.push(2); // pre-filtered by the odd-only layout
        }
        primes.extend(sieve.iter_zeros().map(|i| start + (i as u64) * 2 + 1));
        Ok(primes)
    }
}
