//! Benchmarks for building quintile distributions and classifying members.
//!
//! Classification is the hot path: a caller typically builds one
//! `Distribution` per population and then classifies every member.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quintile_distribution::{Distribution, Group};
use std::hint::black_box;

// One population per layout: small table, ideal and unbalanced
const POPULATIONS: [u16; 4] = [4, 1_000, 1_003, 65_535];

/// Benchmark: construction across all three layouts
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for count in POPULATIONS {
        group.bench_with_input(BenchmarkId::new("i32", count), &count, |b, &count| {
            b.iter(|| black_box(Distribution::<i32>::new(black_box(count))))
        });
        group.bench_with_input(BenchmarkId::new("i64", count), &count, |b, &count| {
            b.iter(|| black_box(Distribution::<i64>::new(black_box(count))))
        });
    }

    group.finish();
}

/// Benchmark: classify every member of the population in rank order
fn bench_classify_population(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_population");

    for count in POPULATIONS {
        group.throughput(Throughput::Elements(u64::from(count)));

        let distribution = Distribution::<i32>::new(count);
        group.bench_with_input(
            BenchmarkId::new("find_quintile", count),
            &distribution,
            |b, distribution| {
                b.iter(|| {
                    let mut bottom = 0usize;
                    for index in 0..i32::from(count) {
                        if distribution.find_quintile(black_box(index)) == Group::Bottom {
                            bottom += 1;
                        }
                    }
                    black_box(bottom)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: classify indices spread across and beyond the population;
/// indices outside it fall through every range check to `Bottom`
fn bench_classify_mixed_indices(c: &mut Criterion) {
    let distribution = Distribution::<i32>::new(1_003);
    let indices: Vec<i32> = (0..10_000).map(|i| -5_000 + i * 7).collect();

    c.bench_function("classify_mixed_indices", |b| {
        b.iter(|| {
            let mut counts = [0usize; 5];
            for &index in &indices {
                counts[distribution.find_quintile(black_box(index)).position()] += 1;
            }
            black_box(counts)
        })
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_classify_population,
    bench_classify_mixed_indices
);
criterion_main!(benches);
