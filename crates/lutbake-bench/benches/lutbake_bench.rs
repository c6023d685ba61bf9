//! Benchmarks for lutbake lookups and grid generation.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use lutbake_bake::{BakeConfig, ConversionFlags, SamplePipeline, bake, generate_grid, generate_grid_serial};
use lutbake_lut::{Interpolation, Lut1D, Lut3D, ParsedLut, cube};
use lutbake_transfer::log_c;

fn ramp(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32 / n as f32).collect()
}

/// LogC encode/decode, precise and approximate.
fn bench_logc(c: &mut Criterion) {
    let mut group = c.benchmark_group("logc");
    let values = ramp(100_000);
    group.throughput(Throughput::Elements(values.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| values.iter().map(|&x| log_c::encode(black_box(x))).collect::<Vec<_>>())
    });
    group.bench_function("decode", |b| {
        b.iter(|| values.iter().map(|&x| log_c::decode(black_box(x))).collect::<Vec<_>>())
    });
    group.bench_function("encode_fast", |b| {
        b.iter(|| values.iter().map(|&x| log_c::encode_fast(black_box(x))).collect::<Vec<_>>())
    });

    group.finish();
}

/// 1D lookups across table sizes.
fn bench_lut1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut1d");
    let values = ramp(10_000);
    group.throughput(Throughput::Elements(values.len() as u64));

    for size in [256usize, 1024, 4096] {
        let lut = Lut1D::identity(size);

        group.bench_with_input(BenchmarkId::new("map_linear", size), &lut, |b, lut| {
            b.iter(|| {
                for &v in &values {
                    let _ = black_box(lut.map_linear(black_box(v)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("map_channels_nearest", size), &lut, |b, lut| {
            b.iter(|| {
                for &v in &values {
                    let _ = black_box(lut.map_channels(black_box([v, v, v]), Interpolation::Nearest));
                }
            })
        });
    }

    group.finish();
}

/// Trilinear lookups across cube sizes.
fn bench_lut3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut3d");
    let values: Vec<[f32; 3]> = ramp(10_000)
        .into_iter()
        .map(|v| [v, 1.0 - v, (v * 7.0).fract()])
        .collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    for size in [17usize, 33, 65] {
        let lut = Lut3D::identity(size);
        group.bench_with_input(BenchmarkId::new("map_trilinear", size), &lut, |b, lut| {
            b.iter(|| {
                for &rgb in &values {
                    let _ = black_box(lut.map_trilinear(black_box(rgb)));
                }
            })
        });
    }

    group.finish();
}

/// Grid generation, parallel against serial.
fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    group.sample_size(20);

    let lut = Lut3D::identity(33);
    let pipeline = SamplePipeline::new(ConversionFlags::logc_input(), None, Some(&lut)).unwrap();

    for size in [33usize, 65] {
        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, &size| {
            b.iter(|| generate_grid(black_box(size), &pipeline))
        });
        group.bench_with_input(BenchmarkId::new("serial", size), &size, |b, &size| {
            b.iter(|| generate_grid_serial(black_box(size), &pipeline))
        });
    }

    group.finish();
}

/// Parse plus bake of a 33^3 .cube held in memory.
fn bench_bake(c: &mut Criterion) {
    let mut text = String::from("LUT_3D_SIZE 33\n");
    for v in &Lut3D::identity(33).values {
        text += &format!("{:.6} {:.6} {:.6}\n", v[0], v[1], v[2]);
    }

    let mut group = c.benchmark_group("bake");
    group.sample_size(20);

    group.bench_function("parse_cube_33", |b| b.iter(|| cube::parse_str(black_box(&text))));

    let parsed: ParsedLut = cube::parse_str(&text).unwrap();
    let config = BakeConfig::default();
    group.bench_function("bake_33", |b| b.iter(|| bake(black_box(&parsed), &config)));

    group.finish();
}

criterion_group!(benches, bench_logc, bench_lut1d, bench_lut3d, bench_grid, bench_bake);
criterion_main!(benches);
