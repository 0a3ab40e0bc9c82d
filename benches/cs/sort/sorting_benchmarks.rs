use algo_kernels::sort::{merge_sort, quicksort, quicksort_iterative};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_input(len: usize) -> Vec<i64> {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    for &len in &[100, 1_000, 10_000] {
        let input = random_input(len);

        group.bench_with_input(BenchmarkId::new("quicksort", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut arr| quicksort(black_box(&mut arr)),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(
            BenchmarkId::new("quicksort_iterative", len),
            &input,
            |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut arr| quicksort_iterative(black_box(&mut arr)),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(BenchmarkId::new("merge_sort", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut arr| merge_sort(black_box(&mut arr)),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("std_sort", len), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut arr| black_box(&mut arr).sort(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

// First-element pivots degrade to quadratic time on sorted input.
fn bench_sorted_input(c: &mut Criterion) {
    let sorted: Vec<i64> = (0..2_000).collect();
    let mut group = c.benchmark_group("sorted_input");
    group.bench_function("quicksort", |b| {
        b.iter_batched(
            || sorted.clone(),
            |mut arr| quicksort(black_box(&mut arr)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || sorted.clone(),
            |mut arr| merge_sort(black_box(&mut arr)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_sorts, bench_sorted_input);
criterion_main!(benches);
