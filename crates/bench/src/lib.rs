use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes a sort is measured against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    Ascending,
    Descending,
    /// Values follow `x^3` over `[-1, 1]`, shuffled: dense duplicates near the middle.
    CubicSkew,
    /// Same as [`Distribution::CubicSkew`] with `x^5`.
    QuinticSkew,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::Ascending,
    Distribution::Descending,
    Distribution::CubicSkew,
    Distribution::QuinticSkew,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::CubicSkew => "cubic_skew",
            Self::QuinticSkew => "quintic_skew",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R, size: usize) -> Vec<i32> {
        match self {
            Self::RandomUniform => (0..size).map(|_| rng.random::<i32>()).collect(),
            Self::Ascending => (0..size).map(|i| i as i32).collect(),
            Self::Descending => (0..size).map(|i| (size - i) as i32).collect(),
            Self::CubicSkew => skewed(rng, size, 3),
            Self::QuinticSkew => skewed(rng, size, 5),
        }
    }
}

fn skewed<R: Rng + ?Sized>(rng: &mut R, size: usize, power: i32) -> Vec<i32> {
    let n = size as f64;
    let mut data = (0..size)
        .map(|i| {
            let x = 2.0 * i as f64 / n - 1.0;
            ((x.powi(power) + 1.0) / 2.0 * n + 1.0) as i32
        })
        .collect::<Vec<_>>();
    data.shuffle(rng);
    data
}
