//! Benchmarks for palette generation and color conversion.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use swatchkit::color::{hex_to_rgb, hsl_to_hex, rgb_to_hsl};
use swatchkit::export::ExportedPalette;
use swatchkit::{generate_palette, PaletteStudio, Strategy, StudioConfig};

/// Benchmark hex -> RGB -> HSL -> hex for a single color
fn bench_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_hex_hsl_hex", |b| {
        b.iter(|| {
            let rgb = hex_to_rgb(black_box("#3B82F6"));
            let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
            hsl_to_hex(hsl.h, hsl.s, hsl.l)
        })
    });
}

/// Benchmark each strategy on the default base color
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_palette");
    group.throughput(Throughput::Elements(1));

    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::new("strategy", strategy.tag()),
            &strategy,
            |b, &strategy| {
                let mut rng = StdRng::seed_from_u64(1);
                b.iter(|| generate_palette(black_box("#3B82F6"), strategy, &mut rng))
            },
        );
    }

    group.finish();
}

/// Benchmark generation through the studio with a full history
fn bench_studio_with_history(c: &mut Criterion) {
    let mut studio = PaletteStudio::new(StudioConfig {
        seed: Some(1),
        ..StudioConfig::default()
    })
    .expect("Failed to create studio");

    c.bench_function("studio_generate_evicting", |b| {
        b.iter(|| {
            studio
                .generate(black_box("#3B82F6"), "triadic")
                .expect("Failed to generate")
        })
    });
}

/// Benchmark JSON export of one palette
fn bench_export(c: &mut Criterion) {
    let palette = generate_palette("#3B82F6", Strategy::Tetradic, &mut StdRng::seed_from_u64(1));
    let exported = ExportedPalette::from(&palette);

    c.bench_function("export_json", |b| {
        b.iter(|| black_box(&exported).to_json().expect("Failed to export"))
    });
}

criterion_group!(
    benches,
    bench_roundtrip,
    bench_strategies,
    bench_studio_with_history,
    bench_export
);
criterion_main!(benches);
