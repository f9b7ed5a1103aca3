use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use extbst::BSTMap;
use std::collections::BTreeMap;

const N: usize = 10_000;

// Sorted input builds a chain, so every operation walks the whole tree.
const N_ORDERED: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("map_insert_random");

    group.bench_function(BenchmarkId::new("BSTMap", N), |b| {
        b.iter(|| {
            let mut map = BSTMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert_ordered");

    group.bench_function(BenchmarkId::new("BSTMap", N_ORDERED), |b| {
        b.iter(|| {
            let mut map = BSTMap::new();
            for i in 0..N_ORDERED as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N_ORDERED), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N_ORDERED as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_map: BSTMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_get_random");

    group.bench_function(BenchmarkId::new("BSTMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bst_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = bt_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_map_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_map: BSTMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_remove_random");

    group.bench_function(BenchmarkId::new("BSTMap", N), |b| {
        b.iter_batched(
            || bst_map.clone(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || bt_map.clone(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_map_iter(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst_map: BSTMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_iter");

    group.bench_function(BenchmarkId::new("BSTMap", N), |b| {
        b.iter(|| bst_map.iter().fold(0i64, |acc, (_, &v)| acc.wrapping_add(v)));
    });

    group.bench_function(BenchmarkId::new("BSTMap::entry_set", N), |b| {
        b.iter(|| bst_map.entry_set().len());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| bt_map.iter().fold(0i64, |acc, (_, &v)| acc.wrapping_add(v)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_map_insert_random,
    bench_map_insert_ordered,
    bench_map_get_random,
    bench_map_remove_random,
    bench_map_iter,
);
criterion_main!(benches);
