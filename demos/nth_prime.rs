use num_nthprime::{nth_prime_with, SieveConfig};
use std::time::Instant;

/// Print the n-th prime (0-indexed) for every position given on the command line.
/// Set RUST_LOG=debug to see how the domain is partitioned.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = SieveConfig::default();
    for arg in std::env::args().skip(1) {
        let n: i64 = match arg.parse() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("{}: {}", arg, e);
                continue;
            }
        };

        let start = Instant::now();
        match nth_prime_with(n, &config) {
            Ok(p) => println!("nth_prime({}) = {} ({:.2?})", n, p, start.elapsed()),
            Err(e) => eprintln!("nth_prime({}) failed: {}", n, e),
        }
    }
}
