//! Criterion benchmarks for nearest-neighbour routes (cost matrix + walk).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use waypoint::route::{solve_with_method, RouteMethod};

fn random_rows(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)])
        .collect()
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");
    for &n in &[10usize, 100, 500] {
        for method in [RouteMethod::Tsp, RouteMethod::NaiveVrp] {
            group.bench_with_input(BenchmarkId::new(method.to_string(), n), &n, |b, &n| {
                b.iter_batched(
                    || random_rows(n, 45),
                    |pts| {
                        let _order = solve_with_method(&pts, 0, method).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_route);
criterion_main!(benches);
