//! Criterion benchmarks for the degenerate-pair search.
//! Focus primes: p in {19, 43, 79, 127}; slope chosen to be degenerate where one exists.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use primetri::search::{find_degenerate_quad, find_degenerate_quad_direct, PairBuckets};
use primetri::{interior::find_inside_points, Triangle};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &(a, p) in &[(8i64, 19i64), (7, 43), (24, 79), (5, 127)] {
        let t = Triangle::prime(a, p);
        group.bench_with_input(BenchmarkId::new("bucketed", p), &t, |b, t| {
            b.iter(|| find_degenerate_quad(t))
        });
        group.bench_with_input(BenchmarkId::new("direct", p), &t, |b, t| {
            b.iter(|| find_degenerate_quad_direct(t))
        });
        group.bench_with_input(BenchmarkId::new("buckets_only", p), &t, |b, t| {
            let points = find_inside_points(t);
            b.iter(|| PairBuckets::build(t, &points))
        });
    }
    group.finish();
}

fn bench_random_slopes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(43);
    let p = 61;
    let slopes: Vec<i64> = (0..16).map(|_| rng.gen_range(2..p)).collect();
    c.bench_function("search/random_slopes_p61", |b| {
        b.iter(|| {
            slopes
                .iter()
                .filter(|&&a| find_degenerate_quad(&Triangle::prime(a, p)).is_some())
                .count()
        })
    });
}

criterion_group!(benches, bench_search, bench_random_slopes);
criterion_main!(benches);
