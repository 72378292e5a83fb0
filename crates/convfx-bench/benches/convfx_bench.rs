//! Benchmarks for kernel preprocessing and shader synthesis.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use convfx_bench::ramp_matrix;
use convfx_kernel::{convolve, Kernel};
use convfx_shader::{ShaderLanguage, ShaderSynthesizer, SynthesisConfig};

/// Benchmark matrix parsing and normalization.
fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    for size in [3usize, 7, 15].iter() {
        let text = ramp_matrix(*size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, t| {
            b.iter(|| Kernel::parse(black_box(t)).unwrap())
        });

        let kernel = Kernel::parse(&text).unwrap();
        group.bench_with_input(BenchmarkId::new("normalize", size), &kernel, |b, k| {
            b.iter(|| black_box(k).normalized())
        });
    }

    group.finish();
}

/// Benchmark shader synthesis per language.
fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");

    for lang in ShaderLanguage::ALL {
        let synth = ShaderSynthesizer::builtin(SynthesisConfig::for_language(lang));
        for size in [3usize, 9].iter() {
            let kernel = Kernel::gaussian(*size, *size as f32 / 3.0);
            group.bench_with_input(
                BenchmarkId::new(lang.name(), size),
                &kernel,
                |b, k| b.iter(|| synth.synthesize(black_box(k)).unwrap()),
            );
        }
    }

    group.finish();
}

/// Benchmark the CPU reference convolution.
fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolve");
    let (w, h) = (256, 256);
    let src: Vec<f32> = (0..w * h * 3).map(|i| (i % 255) as f32 / 255.0).collect();
    group.throughput(Throughput::Elements((w * h) as u64));

    for size in [3usize, 5].iter() {
        let kernel = Kernel::box_blur(*size);
        group.bench_with_input(BenchmarkId::new("box", size), &kernel, |b, k| {
            b.iter(|| convolve(black_box(&src), w, h, 3, k).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_synthesize, bench_convolve);
criterion_main!(benches);
