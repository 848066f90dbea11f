use bench::{apply_runtime_config, default_rng, random_insert_positions, random_values};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use window_list::WindowList;

const SIZES: [usize; 3] = [1_024, 4_096, 16_384];
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000..=1_000_000;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_list/push_pop");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);

        group.bench_function(BenchmarkId::new("window_list", size), |bencher| {
            bencher.iter(|| {
                let mut list = WindowList::new();
                for &value in &values {
                    list.push(black_box(value));
                }
                let mut acc = 0_i64;
                while let Ok(value) = list.pop() {
                    acc ^= value;
                }
                black_box(acc);
            })
        });
        group.bench_function(BenchmarkId::new("vec", size), |bencher| {
            bencher.iter(|| {
                let mut list = Vec::new();
                for &value in &values {
                    list.push(black_box(value));
                }
                let mut acc = 0_i64;
                while let Some(value) = list.pop() {
                    acc ^= value;
                }
                black_box(acc);
            })
        });
    }

    group.finish();
}

fn bench_random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_list/random_insert");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        let positions = random_insert_positions(&mut rng, size);

        group.bench_function(BenchmarkId::new("window_list", size), |bencher| {
            bencher.iter(|| {
                let mut list = WindowList::new();
                for (&value, &at) in values.iter().zip(&positions) {
                    list.insert(black_box(at), black_box(value)).unwrap();
                }
                black_box(list.len());
            })
        });
        group.bench_function(BenchmarkId::new("vec", size), |bencher| {
            bencher.iter(|| {
                let mut list = Vec::new();
                for (&value, &at) in values.iter().zip(&positions) {
                    list.insert(black_box(at), black_box(value));
                }
                black_box(list.len());
            })
        });
    }

    group.finish();
}

fn bench_cursor_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_list/cursor_scan");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        let mut list: WindowList<i64> = values.iter().copied().collect();

        group.bench_function(BenchmarkId::new("window_list", size), |bencher| {
            bencher.iter(|| {
                let mut cursor = list.cursor();
                let mut acc = 0_i64;
                while let Ok(value) = cursor.advance() {
                    acc ^= value;
                }
                black_box(acc);
            })
        });
        group.bench_function(BenchmarkId::new("vec", size), |bencher| {
            bencher.iter(|| {
                let mut acc = 0_i64;
                for &value in &values {
                    acc ^= value;
                }
                black_box(acc);
            })
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_list/contains");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config(&mut group, size);
        let values = random_values(&mut rng, size, VALUE_RANGE);
        let probes = random_values(&mut rng, 256, VALUE_RANGE);
        let list: WindowList<i64> = values.iter().copied().collect();

        group.bench_function(BenchmarkId::new("window_list", size), |bencher| {
            bencher.iter(|| {
                let mut hits = 0_usize;
                for probe in &probes {
                    if list.contains(black_box(probe)) {
                        hits += 1;
                    }
                }
                black_box(hits);
            })
        });
        group.bench_function(BenchmarkId::new("vec", size), |bencher| {
            bencher.iter(|| {
                let mut hits = 0_usize;
                for probe in &probes {
                    if values.contains(black_box(probe)) {
                        hits += 1;
                    }
                }
                black_box(hits);
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_random_insert,
    bench_cursor_scan,
    bench_contains
);
criterion_main!(benches);
