use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_UNIQUE_KEYS: u64 = 4;
const SAWTOOTH_PERIOD: usize = 64;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes used to exercise sorts, including the classic quicksort
/// worst cases for naive pivot choices.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    Random,
    Ascending,
    Descending,
    /// Rises to the middle and falls back: `0, 1, .., k, .., 1, 0`.
    OrganPipe,
    AllEqual,
    FewUnique,
    Sawtooth,
}

pub const ALL_PATTERNS: [Pattern; 7] = [
    Pattern::Random,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::OrganPipe,
    Pattern::AllEqual,
    Pattern::FewUnique,
    Pattern::Sawtooth,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::OrganPipe => "organ_pipe",
            Self::AllEqual => "all_equal",
            Self::FewUnique => "few_unique",
            Self::Sawtooth => "sawtooth",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, len: usize, rng: &mut R) -> Vec<u64> {
        match self {
            Self::Random => (0..len).map(|_| rng.random::<u64>()).collect(),
            Self::Ascending => (0..len as u64).collect(),
            Self::Descending => (0..len as u64).rev().collect(),
            Self::OrganPipe => (0..len).map(|i| i.min(len - 1 - i) as u64).collect(),
            Self::AllEqual => vec![7; len],
            Self::FewUnique => (0..len)
                .map(|_| rng.random_range(0..FEW_UNIQUE_KEYS))
                .collect(),
            Self::Sawtooth => (0..len).map(|i| (i % SAWTOOTH_PERIOD) as u64).collect(),
        }
    }
}
