use num_nthprime::{
    nth_prime, nth_prime_bounds, nth_prime_with, primes, NthPrimeSieve, SieveConfig, SieveError,
    SieveResult,
};
use rand::Rng;

fn is_prime_trial(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= x {
        if x % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[test]
fn seed_literals() {
    assert_eq!(nth_prime(0), Ok(2));
    assert_eq!(nth_prime(1), Ok(3));
    assert_eq!(nth_prime(2), Ok(5));
    assert_eq!(nth_prime(10), Ok(31));
    assert_eq!(nth_prime(12), Ok(41));
    assert_eq!(nth_prime(13), Ok(43));
    assert_eq!(nth_prime(14), Ok(47));
    assert_eq!(nth_prime(19), Ok(71));
    assert_eq!(nth_prime(99), Ok(541));
    assert_eq!(nth_prime(9999), Ok(104729));
    assert_eq!(nth_prime(99999), Ok(1299709));
}

#[test]
fn one_millionth_prime() {
    // 15485863 is the millionth prime, so it sits at 0-indexed position 999999
    assert_eq!(nth_prime(999999), Ok(15485863));
    assert_eq!(nth_prime(1000000), Ok(15485867));
}

#[test]
fn small_chunks_cross_boundaries() {
    let config = SieveConfig::with_chunk_size(1 << 16);
    assert_eq!(nth_prime_with(99999, &config), Ok(1299709));
    assert_eq!(nth_prime_with(1000000, &config), Ok(15485867));
}

#[test]
fn results_are_prime_and_increasing() {
    let sieve = NthPrimeSieve::new(SieveConfig::with_chunk_size(512));
    let mut last = 0;
    for n in 0..3000 {
        let p = sieve.nth_prime(n).unwrap();
        assert!(is_prime_trial(p), "{} is not a prime", p);
        assert!(p > last, "nth_prime({}) = {} is not above {}", n, p, last);
        last = p;
    }
}

#[test]
fn random_positions_match_prime_list() {
    let table = primes(2_000_000).unwrap();
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n = rng.gen_range(0..table.len());
        assert_eq!(nth_prime(n as i64), Ok(table[n]));
    }
}

#[test]
fn bounds_bracket_results() {
    for n in (5..50_000).step_by(997) {
        let p = nth_prime(n as i64).unwrap();
        let (lo, hi) = nth_prime_bounds(n).unwrap();
        assert!(lo <= p && p <= hi);
    }
}

#[test]
fn negative_input_is_rejected() {
    assert_eq!(nth_prime(-1), Err(SieveError::InvalidArgument(-1)));
}

#[test]
fn forced_underestimate_is_explicit() {
    let too_small = |_n: u64| -> SieveResult<u64> { Ok(100) };

    let strict = SieveConfig {
        max_retries: 0,
        ..SieveConfig::default()
    };
    let sieve = NthPrimeSieve::with_estimator(strict, too_small);
    assert_eq!(
        sieve.nth_prime(1000),
        Err(SieveError::BoundUnderestimate { n: 1000, limit: 100, found: 25 })
    );

    // 100 * 2^7 = 12800 > 7927, the 1001st prime
    let retrying = SieveConfig {
        max_retries: 7,
        ..SieveConfig::default()
    };
    let sieve = NthPrimeSieve::with_estimator(retrying, too_small);
    assert_eq!(sieve.nth_prime(1000), Ok(7927));
}

#[test]
#[ignore = "sieves about 200 million values"]
fn ten_millionth_prime() {
    assert_eq!(nth_prime(10_000_000), Ok(179424691));
}

#[test]
#[ignore = "sieves several billion values and needs gigabytes of memory"]
fn large_positions() {
    assert_eq!(nth_prime(59950298), Ok(1189457257));
    assert_eq!(nth_prime(100000000), Ok(2038074751));
    assert_eq!(nth_prime(140000000), Ok(2902958803));
}
