//! Benchmarks for allocation and renormalization.
//!
//! Run with: cargo bench -p reorder-core

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reorder_core::{OrderItem, Position, SpacingConfig, allocate, renormalize};
use std::hint::black_box;

fn evenly_spaced(len: usize, cfg: &SpacingConfig) -> Vec<OrderItem> {
    (0..len)
        .map(|i| {
            OrderItem::new(
                format!("item-{i}"),
                Position::new((i as f64 + 1.0) * cfg.step).unwrap(),
            )
        })
        .collect()
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("spacing/allocate");
    let cfg = SpacingConfig::default();

    for len in [10usize, 100, 1_000] {
        let items = evenly_spaced(len, &cfg);
        let mid = len / 2;

        group.bench_with_input(BenchmarkId::new("midpoint", len), &(), |b, _| {
            b.iter(|| black_box(allocate(black_box(&items), mid, &cfg)))
        });

        group.bench_with_input(BenchmarkId::new("front", len), &(), |b, _| {
            b.iter(|| black_box(allocate(black_box(&items), 0, &cfg)))
        });
    }

    group.finish();
}

fn bench_renormalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("spacing/renormalize");
    let cfg = SpacingConfig::default();

    for len in [10usize, 100, 1_000] {
        let items = evenly_spaced(len, &cfg);

        group.bench_with_input(BenchmarkId::new("full", len), &(), |b, _| {
            b.iter(|| black_box(renormalize(black_box(&items), &cfg)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_allocate, bench_renormalize);
criterion_main!(benches);
