//! Benchmarks for table construction and rendering.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use rgblut_core::{Components, ImageBuffer, NeverAbort, PixelBuffer, RenderWindow};
use rgblut_lut::{CurveEvaluator, LutBuilder, RgbCurves};
use rgblut_ops::{RenderArgs, RenderOptions, render};

fn curves() -> RgbCurves {
    RgbCurves::new(
        "0:0,0.25:0.4,0.5:0.7,1:1".parse().unwrap(),
        "0:0.05,1:0.95".parse().unwrap(),
        "0:0,0.5:0.3,1:1".parse().unwrap(),
    )
}

/// Benchmark LUT construction per depth.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_build");
    let curves = curves();
    let builder = LutBuilder::new(Some(&curves as &dyn CurveEvaluator)).unwrap();

    group.bench_function("u8", |b| b.iter(|| black_box(builder.build::<u8>())));
    group.bench_function("u16", |b| b.iter(|| black_box(builder.build::<u16>())));
    group.bench_function("f32", |b| b.iter(|| black_box(builder.build::<f32>())));

    group.finish();
}

/// Benchmark a full-frame render at different thread counts.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let curves = curves();
    let bounds = RenderWindow::from_size(1920, 1080);
    let n = bounds.area() * 4;

    let src_u8: ImageBuffer = PixelBuffer::from_data(bounds, Components::Rgba, (0..n).map(|i| i as u8).collect())
        .unwrap()
        .into();
    let src_f32: ImageBuffer =
        PixelBuffer::from_data(bounds, Components::Rgba, (0..n).map(|i| (i % 1000) as f32 / 999.0).collect())
            .unwrap()
            .into();

    group.throughput(Throughput::Elements(bounds.area() as u64));
    for threads in [1usize, 4, 0] {
        let args = RenderArgs::new(bounds).with_options(RenderOptions::default().with_threads(threads));
        for (name, src) in [("u8", &src_u8), ("f32", &src_f32)] {
            let mut dst = ImageBuffer::new(bounds, src.layout());
            group.bench_with_input(BenchmarkId::new(name, threads), src, |b, src| {
                b.iter(|| render(Some(&curves), &mut dst, Some(src), args, &NeverAbort).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
