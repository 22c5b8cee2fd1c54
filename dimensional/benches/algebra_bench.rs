//! Signature Algebra Benchmarks
//!
//! Measures the hot paths of unit checking:
//! 1. Canonicalization of unordered entry lists of growing size
//! 2. Sorted-merge multiplication of wide signatures
//! 3. Quantity arithmetic, where every step recomputes a signature
//! 4. Canonical printing

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dimensional::{format_signature, Dimension, DimensionRegistry, Quantity, UnitSignature};

/// A registry with `count` dimensions named `d00`, `d01`, ...
fn create_dimensions(count: usize) -> (DimensionRegistry, Vec<Dimension>) {
    let registry = DimensionRegistry::new();
    let dims = (0..count)
        .map(|i| {
            registry
                .define(format!("d{:02}", i), format!("u{:02}", i))
                .map(|(dim, _)| dim)
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default();
    (registry, dims)
}

/// Entries in reverse order with every dimension repeated, so normalize
/// has to sort and coalesce
fn scrambled_entries(dims: &[Dimension]) -> Vec<(Dimension, i32)> {
    dims.iter()
        .rev()
        .enumerate()
        .flat_map(|(i, d)| {
            let exponent = (i % 3) as i32 + 1;
            [(d.clone(), exponent), (d.clone(), -1)]
        })
        .collect()
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [2, 7, 16, 32] {
        let (_registry, dims) = create_dimensions(size);
        let entries = scrambled_entries(&dims);
        group.bench_with_input(BenchmarkId::new("scrambled", size), &entries, |b, entries| {
            b.iter(|| UnitSignature::normalize(black_box(entries.clone())));
        });
    }

    group.finish();
}

fn benchmark_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [2, 7, 16, 32] {
        let (_registry, dims) = create_dimensions(size);
        let left = UnitSignature::normalize(dims.iter().map(|d| (d.clone(), 2)));
        let right = UnitSignature::normalize(dims.iter().step_by(2).map(|d| (d.clone(), -1)));
        group.bench_with_input(
            BenchmarkId::new("interleaved", size),
            &(left, right),
            |b, (left, right)| {
                b.iter(|| black_box(left).multiply(black_box(right)));
            },
        );
    }

    group.finish();
}

fn benchmark_quantity(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantity");

    let registry = DimensionRegistry::new();
    let meter = registry.define("Distance", "meter").map(|(_, u)| u).unwrap_or_default();
    let second = registry.define("time", "second").map(|(_, u)| u).unwrap_or_default();
    let mps2 = &meter / &second.pow(2);

    group.bench_function("velocity", |b| {
        b.iter(|| {
            let acceleration = black_box(9.8_f64) * &mps2;
            let time = black_box(10.0_f64) * &second;
            acceleration * time
        });
    });

    group.bench_function("same_unit_sum", |b| {
        let step = Quantity::new(1.5_f64, meter.clone());
        b.iter(|| {
            let mut total = Quantity::new(0.0_f64, meter.clone());
            for _ in 0..64 {
                let _ = total.try_add_assign(black_box(&step));
            }
            total
        });
    });

    group.finish();
}

fn benchmark_format(c: &mut Criterion) {
    let (_registry, dims) = create_dimensions(7);
    let signature = UnitSignature::normalize(
        dims.iter()
            .enumerate()
            .map(|(i, d)| (d.clone(), if i % 2 == 0 { 2 } else { -1 })),
    );

    c.bench_function("format_signature", |b| {
        b.iter(|| format_signature(black_box(&signature)));
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_multiply,
    benchmark_quantity,
    benchmark_format,
);

criterion_main!(benches);
