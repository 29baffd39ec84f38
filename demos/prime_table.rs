use num_nthprime::{estimate_limit, nth_prime_bounds, NthPrimeSieve};

/// Compare the heuristic sieve limit and the proven bracket with the actual n-th prime
fn main() {
    let sieve = NthPrimeSieve::default();
    println!("{:>10} {:>12} {:>12} {:>12} {:>12}", "n", "prime", "estimate", "lower", "upper");
    for n in (0..7).map(|e| 10u64.pow(e)) {
        let p = sieve.nth_prime(n).unwrap();
        let limit = estimate_limit(n).unwrap();
        let (lo, hi) = nth_prime_bounds(n).unwrap_or((0, 0));
        println!("{:>10} {:>12} {:>12} {:>12} {:>12}", n, p, limit, lo, hi);
    }
}
