use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const SMALL_MEASURE_MS: u64 = 120;
const LARGE_MEASURE_MS: u64 = 300;
const XL_MEASURE_MS: u64 = 500;
const SMALL_INPUT_MAX: usize = 16384;
const LARGE_INPUT_MAX: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

/// Picks sampling and measurement time from the input length.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if len <= SMALL_INPUT_MAX {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(SMALL_MEASURE_MS));
    } else if len <= LARGE_INPUT_MAX {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(LARGE_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(XL_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

/// Keys drawn from `[0, max]` that repeat heavily: only `distinct` values occur.
pub fn few_distinct<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: u64, max: i64) -> Vec<i64> {
    let distinct = distinct.max(1);
    let step = (max.max(0) as u64 / distinct).max(1);
    (0..len)
        .map(|_| (rng.random_range(0..distinct) * step) as i64)
        .collect()
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
