//! Find the n-th prime with a segmented sieve of Eratosthenes.
//!
//! The sieve domain `[0, limit)` is bounded by a heuristic estimate of the n-th prime,
//! split into fixed-size chunks, and every chunk is sieved independently on a rayon worker
//! with the primes below `sqrt(limit)`. The chunk results are joined in chunk order and
//! indexed to pick the answer.
//!
//! ```
//! use num_nthprime::nth_prime;
//! assert_eq!(nth_prime(0), Ok(2));
//! assert_eq!(nth_prime(99), Ok(541));
//! ```

mod bound;
mod buffer;
mod error;
mod segment;
mod sieve;
mod traits;

pub mod nt_funcs;

pub use bound::{estimate_limit, nth_prime_bounds, HeuristicBound};
pub use buffer::BasePrimes;
pub use error::{SieveError, SieveResult};
pub use nt_funcs::{nth_prime, nth_prime_with, prime_pi, primes};
pub use segment::{partition, Chunk};
pub use sieve::{NthPrimeSieve, PrimeSegments};
pub use traits::{BoundEstimate, SieveConfig, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_RETRIES};
