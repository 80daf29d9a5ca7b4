//! Compression Benchmarks
//!
//! **Purpose:** Measure gzip and brotli at the settings every run uses
//! (gzip best, brotli quality 11 / window 22)
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench compression
//! ```
//!
//! **What's Being Measured:**
//! 1. `gzip_encode` / `brotli_encode` over a minified stylesheet in memory
//! 2. `compress file` - both encodings in parallel plus file I/O
//!
//! **Performance Notes:**
//! - Brotli at quality 11 dominates the per-item wall time
//! - `Compressor::compress` overlaps the two encodings with `rayon::join`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use css_bench::infra::RealFileSystem;
use css_bench::pipeline::compressor::{brotli_encode, gzip_encode};
use css_bench::pipeline::Compressor;
use std::hint::black_box;
use tempfile::TempDir;

fn minified_css() -> Vec<u8> {
    (0..20_000)
        .map(|i| format!(".m-{i}{{margin:{}px}}.hover\\:text-c{i}:hover{{color:#{:06x}}}", i % 64, i * 7919 % 0xffffff))
        .collect::<String>()
        .into_bytes()
}

fn bench_encoders(c: &mut Criterion) {
    let css = minified_css();
    let mut group = c.benchmark_group("encode");
    group.sample_size(10);
    group.bench_function("gzip_encode", |b| b.iter(|| gzip_encode(black_box(&css)).unwrap()));
    group.bench_function("brotli_encode", |b| b.iter(|| brotli_encode(black_box(&css)).unwrap()));
    group.finish();
}

fn bench_compress_file(c: &mut Criterion) {
    let css = minified_css();
    let mut group = c.benchmark_group("compressor");
    group.sample_size(10);
    group.bench_function("compress file", |b| {
        b.iter_batched(
            || {
                let dir = TempDir::new().unwrap();
                let path = dir.path().join("full.min.css");
                std::fs::write(&path, &css).unwrap();
                (dir, path)
            },
            |(_dir, path)| Compressor::new(RealFileSystem).compress(&path).unwrap(),
            BatchSize::PerIteration,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_encoders, bench_compress_file);
criterion_main!(benches);
