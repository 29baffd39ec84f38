//! BasePrimes holds the small primes needed to sieve a whole domain

use crate::error::{SieveError, SieveResult};
use bitvec::bitvec;
use std::convert::TryFrom;

/// Ascending list of all primes not larger than `floor(sqrt(limit)) + 1`.
///
/// Every composite below `limit` has a prime factor in this list, so it is all
/// a chunk sieve needs. It is computed once per sieve domain and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePrimes {
    list: Vec<u64>, // sorted primes
    bound: u64,     // all primes not larger than this value are in the list
}

impl BasePrimes {
    /// Generate the base primes for the sieve domain [0, limit) with an odd-only sieve
    pub fn for_limit(limit: u64) -> SieveResult<Self> {
        let bound = num_integer::sqrt(limit) + 1;
        let len = usize::try_from((bound + 1) / 2).map_err(|_| SieveError::ArithmeticOverflow {
            what: "the base prime sieve size",
        })?;

        // bit i represents the odd number 2i+1, set bits are composites
        let mut sieve = bitvec![0; len];
        sieve.set(0, true); // 1 is not a prime
        let mut p = 3u64;
        while p * p <= bound {
            if !sieve[(p / 2) as usize] {
                for multi in (p * p..=bound).step_by(2 * p as usize) {
                    sieve.set((multi / 2) as usize, true);
                }
            }
            p += 2;
        }

        let mut list = Vec::with_capacity(sieve.count_zeros() + 1);
        if bound >= 2 {
            list.push(2); // pre-filtered by the odd-only layout
        }
        list.extend(sieve.iter_zeros().map(|i| (i as u64) * 2 + 1));
        Ok(BasePrimes { list, bound })
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.list.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// All primes not larger than the bound are contained in this list
    #[inline]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Test if num is one of the base primes. The result is only meaningful for num <= bound()
    pub fn contains(&self, num: u64) -> bool {
        self.list.binary_search(&num).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIME50: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
    const PRIME100: [u64; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
        97,
    ];

    #[test]
    fn base_prime_generation_test() {
        // sqrt(2401) + 1 = 50
        let base = BasePrimes::for_limit(2401).unwrap();
        assert_eq!(base.bound(), 50);
        assert_eq!(base.as_slice(), &PRIME50);

        // sqrt(10000) + 1 = 101
        let base = BasePrimes::for_limit(10000).unwrap();
        assert_eq!(base.bound(), 101);
        assert_eq!(&base.as_slice()[..25], &PRIME100);
        assert_eq!(base.len(), 26); // with 101
    }

    #[test]
    fn tiny_limit_test() {
        assert_eq!(BasePrimes::for_limit(0).unwrap().as_slice(), &[] as &[u64]);
        assert_eq!(BasePrimes::for_limit(3).unwrap().as_slice(), &[2]);
        assert_eq!(BasePrimes::for_limit(4).unwrap().as_slice(), &[2, 3]);
        assert_eq!(BasePrimes::for_limit(45).unwrap().as_slice(), &[2, 3, 5, 7]);
    }

    #[test]
    fn base_prime_contains_test() {
        let base = BasePrimes::for_limit(100_000_000).unwrap();
        assert_eq!(base.bound(), 10001);
        for x in 0..101 {
            assert_eq!(PRIME100.contains(&x), base.contains(x));
        }
        assert!(base.contains(9973)); // largest prime below 10^4
        assert!(!base.contains(9999));
        assert_eq!(base.len(), 1229);
        assert!(base.iter().zip(base.iter().skip(1)).all(|(a, b)| a < b));
    }
}
