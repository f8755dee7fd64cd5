//! Criterion micro-benchmarks: pool allocation vs per-object heap allocation.
//!
//! Mirrors the workload the arena exists for (bursts of short-lived,
//! same-size objects) and measures the same operation against `Box::new`
//! as the heap baseline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use carve_bench::{arena_for, churn_sequence, run_churn};

const OBJECT_COUNT: usize = 100_000;

/// Small record standing in for a typical pooled object.
///
/// The fields exist for their size; the benchmarks never read them back.
#[allow(dead_code)]
#[derive(Clone, Copy)]
struct Record {
    id: u64,
    weight: f32,
    flags: u32,
}

/// Benchmark: allocate 100K `i32` from a pre-sized arena.
fn bench_arena_alloc_ints(c: &mut Criterion) {
    c.bench_function("arena_alloc_100k_i32", |b| {
        b.iter(|| {
            let mut arena = arena_for::<i32>(OBJECT_COUNT);
            for i in 0..OBJECT_COUNT {
                let ptr = arena.alloc(i as i32).unwrap();
                black_box(ptr);
            }
        });
    });
}

/// Benchmark: allocate 100K `i32` individually on the heap.
fn bench_heap_alloc_ints(c: &mut Criterion) {
    c.bench_function("heap_alloc_100k_i32", |b| {
        b.iter(|| {
            let mut boxes = Vec::with_capacity(OBJECT_COUNT);
            for i in 0..OBJECT_COUNT {
                boxes.push(Box::new(i as i32));
            }
            black_box(&boxes);
        });
    });
}

/// Benchmark: allocate 100K small structs from a pre-sized arena.
fn bench_arena_alloc_structs(c: &mut Criterion) {
    c.bench_function("arena_alloc_100k_struct", |b| {
        b.iter(|| {
            let mut arena = arena_for::<Record>(OBJECT_COUNT);
            for i in 0..OBJECT_COUNT {
                let ptr = arena
                    .alloc(Record {
                        id: i as u64,
                        weight: 1.0,
                        flags: 0,
                    })
                    .unwrap();
                black_box(ptr);
            }
        });
    });
}

/// Benchmark: allocate 100K small structs individually on the heap.
fn bench_heap_alloc_structs(c: &mut Criterion) {
    c.bench_function("heap_alloc_100k_struct", |b| {
        b.iter(|| {
            let mut boxes = Vec::with_capacity(OBJECT_COUNT);
            for i in 0..OBJECT_COUNT {
                boxes.push(Box::new(Record {
                    id: i as u64,
                    weight: 1.0,
                    flags: 0,
                }));
            }
            black_box(&boxes);
        });
    });
}

/// Benchmark: allocate 100K structs, then free them all.
fn bench_arena_alloc_free_cycle(c: &mut Criterion) {
    c.bench_function("arena_alloc_free_100k_struct", |b| {
        b.iter(|| {
            let mut arena = arena_for::<Record>(OBJECT_COUNT);
            let mut live = Vec::with_capacity(OBJECT_COUNT);
            for i in 0..OBJECT_COUNT {
                live.push(
                    arena
                        .alloc(Record {
                            id: i as u64,
                            weight: 1.0,
                            flags: 0,
                        })
                        .unwrap(),
                );
            }
            for ptr in live {
                arena.free(ptr.as_ptr());
            }
            black_box(arena.report());
        });
    });
}

/// Benchmark: mixed alloc/free churn driven by a deterministic sequence.
fn bench_arena_churn(c: &mut Criterion) {
    let ops = churn_sequence(42, 10_000, 0.6);
    c.bench_function("arena_churn_10k_ops", |b| {
        b.iter(|| {
            let mut arena = arena_for::<u64>(4_096);
            black_box(run_churn(&mut arena, &ops));
        });
    });
}

criterion_group!(
    benches,
    bench_arena_alloc_ints,
    bench_heap_alloc_ints,
    bench_arena_alloc_structs,
    bench_heap_alloc_structs,
    bench_arena_alloc_free_cycle,
    bench_arena_churn
);
criterion_main!(benches);
