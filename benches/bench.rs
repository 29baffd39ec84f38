#[macro_use]
extern crate criterion;
use criterion::{BenchmarkId, Criterion, SamplingMode};
use num_nthprime::{nth_prime, NthPrimeSieve, SieveConfig};

pub fn bench_nth_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("nth_prime");
    group.sample_size(10).sampling_mode(SamplingMode::Flat);

    for &n in &[10_000i64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| nth_prime(n).unwrap())
        });
    }

    group.finish();
}

pub fn bench_chunk_size(c: &mut Criterion) {
    const N: u64 = 1_000_000;
    let mut group = c.benchmark_group("chunk size");
    group.sample_size(10).sampling_mode(SamplingMode::Flat);

    for &chunk_size in &[1u64 << 16, 1 << 20, 1 << 22, 100_000_000] {
        let sieve = NthPrimeSieve::new(SieveConfig::with_chunk_size(chunk_size));
        group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &sieve, |b, sieve| {
            b.iter(|| sieve.nth_prime(N).unwrap())
        });
    }
    group.bench_function("sequential", |b| {
        let sieve = NthPrimeSieve::new(SieveConfig {
            chunk_size: 1 << 20,
            ..SieveConfig::sequential()
        });
        b.iter(|| sieve.nth_prime(N).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_nth_prime, bench_chunk_size);
criterion_main!(benches);
