use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    ALL_PATTERNS, Pattern, apply_large_runtime_config, apply_small_runtime_config, default_rng,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use qsort::{sort_by, sort_bytes, sort_copy_by};

const BENCH_SIZES: [usize; 3] = [1024, 16384, 131072];
const RECORD_SIZES: [usize; 3] = [4, 8, 24];
const RECORD_COUNT: usize = 16384;

fn bench_patterns(c: &mut Criterion) {
    let mut rng = default_rng();

    for pattern in ALL_PATTERNS {
        let mut group = c.benchmark_group(format!("qsort/{}", pattern.label()));
        apply_large_runtime_config(&mut group);

        for &size in &BENCH_SIZES {
            let base = pattern.generate(size, &mut rng);

            group.bench_function(BenchmarkId::new("snapshot", size), |bencher| {
                bencher.iter_custom(|iters| {
                    time_iters(iters, &base, |data| {
                        sort_copy_by(data, u64::cmp).unwrap();
                    })
                });
            });

            group.bench_function(BenchmarkId::new("boundary", size), |bencher| {
                bencher.iter_custom(|iters| {
                    time_iters(iters, &base, |data| {
                        sort_by(data, u64::cmp).unwrap();
                    })
                });
            });

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| time_iters(iters, &base, |data| data.sort_unstable()));
            });
        }

        group.finish();
    }
}

fn bench_record_sizes(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("qsort/bytes");
    apply_small_runtime_config(&mut group);

    for &size in &RECORD_SIZES {
        let keys = Pattern::Random.generate(RECORD_COUNT, &mut rng);
        let base = keys
            .iter()
            .flat_map(|&key| {
                let mut record = vec![0_u8; size];
                let len = size.min(8);
                record[..len].copy_from_slice(&key.to_be_bytes()[..len]);
                record
            })
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::new("sort_bytes", size), |bencher| {
            bencher.iter_custom(|iters| {
                time_iters(iters, &base, |data| {
                    sort_bytes(data, RECORD_COUNT, size, |a, b| a.cmp(b)).unwrap();
                })
            });
        });
    }

    group.finish();
}

fn time_iters<T: Clone>(iters: u64, base: &[T], mut run: impl FnMut(&mut [T])) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = Instant::now();
        run(&mut data);
        total += start.elapsed();
        black_box(&data);
    }
    total
}

criterion_group!(benches, bench_patterns, bench_record_sizes);
criterion_main!(benches);
