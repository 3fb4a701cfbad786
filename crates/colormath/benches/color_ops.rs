//! Benchmarks for color conversion and adjustment.
//!
//! Performance budgets:
//! - RGB -> HSL conversion: **< 50ns**
//! - HSL -> RGB conversion: **< 50ns**
//! - Single adjustment (round trip + clamp): **< 100ns**
//! - Untyped JSON boundary (4 channels): **< 200ns**

use colormath::{Rgba, darken, hsla, lighten, mix, saturate, spin, to_hsl};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn sample_colors() -> Vec<Rgba> {
    (0..64u32)
        .map(|i| {
            let f = f64::from(i);
            Rgba::new(f * 4.0, 255.0 - f * 3.5, (f * 37.0) % 255.0, f / 64.0).unwrap()
        })
        .collect()
}

// =============================================================================
// Conversion benchmarks
// =============================================================================

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let colors = sample_colors();

    group.bench_function("to_hsl", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(to_hsl(black_box(*color)));
            }
        });
    });

    let hsls: Vec<_> = colors.iter().map(|c| to_hsl(*c)).collect();
    group.bench_function("hsla", |b| {
        b.iter(|| {
            for hsl in &hsls {
                let _ = black_box(hsla(hsl.h, hsl.s, hsl.l, hsl.a));
            }
        });
    });

    let untyped = json!([12, 200.5, 99, 0.5]);
    group.bench_function("from_json", |b| {
        b.iter(|| black_box(Rgba::try_from(black_box(&untyped))));
    });

    group.finish();
}

// =============================================================================
// Adjustment benchmarks
// =============================================================================

fn bench_adjustments(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjust");
    let color = Rgba::new(100.0, 10.0, 10.0, 1.0).unwrap();

    for amount in [1.0, 10.0, 100.0] {
        group.bench_with_input(BenchmarkId::new("lighten", amount), &amount, |b, &x| {
            b.iter(|| black_box(lighten(black_box(color), x)));
        });
        group.bench_with_input(BenchmarkId::new("saturate", amount), &amount, |b, &x| {
            b.iter(|| black_box(saturate(black_box(color), x)));
        });
    }

    group.bench_function("spin", |b| {
        b.iter(|| black_box(spin(black_box(color), 137.5)));
    });

    // Chains re-enter the HSL round trip at every step.
    group.bench_function("chain_4", |b| {
        b.iter(|| {
            let out = lighten(black_box(color), 10.0)
                .and_then(|c| saturate(c, 20.0))
                .and_then(|c| spin(c, 45.0))
                .and_then(|c| darken(c, 5.0));
            black_box(out)
        });
    });

    let other = Rgba::new(0.0, 0.0, 255.0, 0.5).unwrap();
    group.bench_function("mix", |b| {
        b.iter(|| black_box(mix(black_box(color), black_box(other), 50.0)));
    });

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_adjustments);
criterion_main!(benches);
