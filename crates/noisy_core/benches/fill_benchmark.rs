//! Benchmark for whole-image fills.
//!
//! TARGET: 1024x1024 white noise well under 100ms
//!
//! Run with: cargo bench --package noisy_core --bench fill_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use noisy_core::fill::{fill_color_noise, fill_simplex, fill_white_noise};
use noisy_core::{Color, NoiseContext};

const SIDE: u32 = 1024;

fn benchmark_fills(c: &mut Criterion) {
    let ctx = NoiseContext::from_seed(42);

    let mut group = c.benchmark_group("fill_1024");
    group.throughput(Throughput::Elements(u64::from(SIDE) * u64::from(SIDE)));
    group.sample_size(10);

    group.bench_function("color_noise", |b| {
        b.iter(|| black_box(fill_color_noise(&ctx, SIDE, SIDE)));
    });

    group.bench_function("white_noise", |b| {
        b.iter(|| black_box(fill_white_noise(&ctx, SIDE, SIDE, Color::BLACK, Color::WHITE, 0.5)));
    });

    group.bench_function("simplex", |b| {
        b.iter(|| black_box(fill_simplex(&ctx, SIDE, SIDE, Color::BLACK, Color::WHITE, 10.0)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_fills);
criterion_main!(benches);
