use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use intsort::harness::{random_array, reverse_sorted_array, sorted_array};
use intsort::{algorithm_name, all_algorithms, sort_i64};

const BENCH_SIZES: [usize; 4] = [1000, 5000, 10000, 50000];
const VALUE_SCALE: i64 = 10;
const FEW_DISTINCT_KEYS: u64 = 16;

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    Sorted,
    ReverseSorted,
    FewDistinct,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Sorted => "sorted",
            Self::ReverseSorted => "reverse_sorted",
            Self::FewDistinct => "few_distinct",
        }
    }

    fn salt(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::Sorted => 12,
            Self::ReverseSorted => 13,
            Self::FewDistinct => 14,
        }
    }
}

const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::Sorted,
    Distribution::ReverseSorted,
    Distribution::FewDistinct,
];

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            bench::apply_runtime_for_len(&mut group, size);
            let base = generate_dataset(dist, size);

            for &algo in all_algorithms() {
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            sort_i64(algo, &mut data).unwrap();
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

fn generate_dataset(dist: Distribution, size: usize) -> Vec<i64> {
    let mut rng = bench::seeded_rng((dist.salt() << 48) ^ size as u64);
    let max = size as i64 * VALUE_SCALE;
    match dist {
        Distribution::RandomUniform => random_array(size, max, &mut rng),
        Distribution::Sorted => sorted_array(size),
        Distribution::ReverseSorted => reverse_sorted_array(size),
        Distribution::FewDistinct => bench::few_distinct(&mut rng, size, FEW_DISTINCT_KEYS, max),
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
