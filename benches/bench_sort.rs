use chain_list::List;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for &len in &[1_000, 10_000, 100_000] {
        let values = random_values(len, 315);
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| {
                let mut list: List<u64> = values.iter().copied().collect();
                list.sort();
                black_box(list)
            })
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for &len in &[1_000, 10_000, 100_000] {
        let mut left = random_values(len, 315);
        let mut right = random_values(len, 92);
        left.sort();
        right.sort();
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                let left: List<u64> = left.iter().copied().collect();
                let right: List<u64> = right.iter().copied().collect();
                black_box(left.merge(right))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_merge);
criterion_main!(benches);
