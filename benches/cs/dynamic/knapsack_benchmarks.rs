use algo_kernels::dynamic::{knapsack, knapsack_rolling};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn bench_knapsack(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut group = c.benchmark_group("knapsack");
    for &(items, capacity) in &[(50, 500), (200, 2_000)] {
        let weights: Vec<usize> = (0..items).map(|_| rng.gen_range(1..=100)).collect();
        let values: Vec<u64> = (0..items).map(|_| rng.gen_range(1..=1_000)).collect();
        let id = format!("{}x{}", items, capacity);

        group.bench_function(BenchmarkId::new("table", &id), |b| {
            b.iter(|| knapsack(items, black_box(capacity), &weights, &values))
        });
        group.bench_function(BenchmarkId::new("rolling", &id), |b| {
            b.iter(|| knapsack_rolling(items, black_box(capacity), &weights, &values))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack);
criterion_main!(benches);
