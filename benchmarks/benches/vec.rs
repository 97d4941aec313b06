// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use stowvec::StowVec;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vec
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs StowVec: push
// =============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_push");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("StowVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = StowVec::new();
                for i in 0..s {
                    vec.push(i as u32).expect("Failed to push(..)");
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_push_preallocated(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_push_preallocated");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::with_capacity(s);
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("StowVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = StowVec::with_capacity(s).expect("Failed to with_capacity(..)");
                for i in 0..s {
                    vec.push(i as u32).expect("Failed to push(..)");
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs StowVec: front insert / remove
// =============================================================================

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_insert_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("StowVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = StowVec::new();
                for i in 0..s {
                    vec.insert(0, i as u32).expect("Failed to insert(..)");
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_remove_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u32).collect::<Vec<u32>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        black_box(vec.remove(0));
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("StowVec", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vec = StowVec::with_capacity(s).expect("Failed to with_capacity(..)");
                    for i in 0..s {
                        vec.push(i as u32).expect("Failed to push(..)");
                    }
                    vec
                },
                |mut vec| {
                    while !vec.is_empty() {
                        black_box(vec.remove(0));
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs StowVec: reserve
// =============================================================================

fn bench_reserve(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_reserve");
    configure_group(&mut group);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || vec![1u32; 64],
                |mut vec| {
                    vec.reserve_exact(s);
                    black_box(vec)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("StowVec", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vec = StowVec::new();
                    for _ in 0..64 {
                        vec.push(1u32).expect("Failed to push(..)");
                    }
                    vec
                },
                |mut vec| {
                    vec.reserve(s).expect("Failed to reserve(..)");
                    black_box(vec)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    vec_benches,
    bench_push,
    bench_push_preallocated,
    bench_insert_front,
    bench_remove_front,
    bench_reserve
);

criterion_main!(vec_benches);
