use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x11D0_2026;

/// Scales sample counts and measurement time with the workload size so
/// the large groups stay within a sensible wall-clock budget.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    let (samples, warm_up_ms, measure_ms) = if size <= 4_096 {
        (15, 100, 200)
    } else if size <= 16_384 {
        (15, 500, 1_000)
    } else {
        (10, 800, 1_500)
    };
    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: std::ops::RangeInclusive<i64>,
) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(rng.random_range(range.clone()));
    }
    values
}

/// Insertion positions for an incrementally grown sequence: the i-th
/// position is valid for a sequence of length i.
pub fn random_insert_positions<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut positions = Vec::with_capacity(n);
    for i in 0..n {
        positions.push(rng.random_range(0..=i));
    }
    positions
}
