//! Standalone functions that run the segmented sieve with a given or default configuration

use crate::error::{SieveError, SieveResult};
use crate::sieve::NthPrimeSieve;
use crate::traits::SieveConfig;
use std::convert::TryFrom;

pub use crate::bound::{estimate_limit, nth_prime_bounds};

/// Return the prime at 0-indexed position n (`nth_prime(0) == 2`) with the default configuration.
///
/// Negative n is rejected with [SieveError::InvalidArgument] before any work is done.
/// If the estimated sieve limit holds too few primes it is doubled a few times, and
/// [SieveError::BoundUnderestimate] is returned only if that doesn't help either.
pub fn nth_prime(n: i64) -> SieveResult<u64> {
    nth_prime_with(n, &SieveConfig::default())
}

/// Same as [nth_prime()], with an explicit configuration
pub fn nth_prime_with(n: i64, config: &SieveConfig) -> SieveResult<u64> {
    let n = u64::try_from(n).map_err(|_| SieveError::InvalidArgument(n))?;
    NthPrimeSieve::new(*config).nth_prime(n)
}

/// Returns all primes **below** limit. The primes are sorted.
pub fn primes(limit: u64) -> SieveResult<Vec<u64>> {
    Ok(NthPrimeSieve::default().sieve(limit)?.into_vec())
}

/// Count the primes not larger than x, i.e. the prime counting function pi(x)
pub fn prime_pi(x: u64) -> SieveResult<u64> {
    let limit = x.checked_add(1).ok_or(SieveError::ArithmeticOverflow {
        what: "the prime counting limit",
    })?;
    Ok(NthPrimeSieve::default().sieve(limit)?.len())
}
