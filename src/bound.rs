//! Estimation of the sieve domain for the n-th prime

use crate::error::{SieveError, SieveResult};
use crate::traits::BoundEstimate;
use num_traits::ToPrimitive;

/// Below this position the logarithmic estimate is unstable and a fixed limit is used
const SMALL_N_THRESHOLD: u64 = 14;

/// The fixed limit for small positions, [0, 45) contains the first 14 primes
const SMALL_N_LIMIT: u64 = 45;

/// Estimate an upper bound `limit` such that [0, limit) contains the 0-indexed n-th prime.
///
/// It's the inverted asymptotic of the prime counting function, `n * ln(n * ln(n))`,
/// truncated to an integer. This is a heuristic rather than a certified bound, see
/// [nth_prime_bounds()] for a proven bracket.
pub fn estimate_limit(n: u64) -> SieveResult<u64> {
    if n < SMALL_N_THRESHOLD {
        return Ok(SMALL_N_LIMIT);
    }

    let nf = n as f64;
    let limit = nf * (nf * nf.ln()).ln();
    limit.to_u64().ok_or(SieveError::ArithmeticOverflow {
        what: "the sieve limit estimate",
    })
}

/// The default [BoundEstimate] policy, backed by [estimate_limit()]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicBound;

impl BoundEstimate for HeuristicBound {
    #[inline]
    fn estimate(&self, n: u64) -> SieveResult<u64> {
        estimate_limit(n)
    }
}

/// Return a proven bracket `(lower, upper)` with `lower <= p <= upper`, where p is the 0-indexed
/// n-th prime. Based on the Rosser-Schoenfeld upper bound and Dusart's lower bound for the k-th prime
/// (k = n + 1), which hold for k >= 6. Returns None for n < 5 or if the bracket overflows u64.
///
/// Reference: Pierre Dusart, "The k-th prime is greater than k(ln k + ln ln k - 1) for k >= 2",
/// Mathematics of Computation, 68(225):411-415, 1999.
pub fn nth_prime_bounds(n: u64) -> Option<(u64, u64)> {
    if n < 5 {
        return None;
    }

    let k = n.checked_add(1)? as f64;
    let lnk = k.ln();
    let lnlnk = lnk.ln();
    let lower = k * (lnk + lnlnk - 1.);
    let upper = k * (lnk + lnlnk);
    Some((lower.floor().to_u64()?, upper.ceil().to_u64()?))
}
