//! Structural Statistics Benchmarks
//!
//! **Purpose:** Measure the regex heuristic over minified stylesheets of
//! realistic size
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench css_stats
//! ```
//!
//! **What's Being Measured:**
//! 1. `analyze/<rules>` - all three pattern counts over one stylesheet
//! 2. `minify then analyze` - the per-configuration CPU work of a run
//!
//! **Performance Notes:**
//! - Regexes are compiled once per process (`OnceLock`)
//! - Counting is linear in input size; a full utility build is ~3 MB

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use css_bench::pipeline::minifier::minify_css;
use css_bench::pipeline::{CssStatsStrategy, PatternCssStats};
use std::hint::black_box;

fn utility_css(rules: usize) -> String {
    let mut css = String::with_capacity(rules * 48);
    for i in 0..rules {
        match i % 3 {
            0 => css.push_str(&format!(".text-c{i}{{color:#{:06x}}}", i * 97 % 0xffffff)),
            1 => css.push_str(&format!(".bg-c{i}{{background-color:#{:06x}}}", i * 31 % 0xffffff)),
            _ => css.push_str(&format!(".p-{i}{{padding:{}rem}}", i % 16)),
        }
    }
    css
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for rules in [1_000, 10_000, 50_000] {
        let css = utility_css(rules);
        group.throughput(Throughput::Bytes(css.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rules), &css, |b, css| {
            b.iter(|| PatternCssStats.analyze(black_box(css)))
        });
    }
    group.finish();
}

fn bench_minify_then_analyze(c: &mut Criterion) {
    let css = utility_css(10_000).replace('{', " {\n  ").replace('}', ";\n}\n");
    c.bench_function("minify then analyze", |b| {
        b.iter(|| {
            let minified = minify_css(black_box(&css), "bench.css").unwrap();
            PatternCssStats.analyze(&minified)
        })
    });
}

criterion_group!(benches, bench_analyze, bench_minify_then_analyze);
criterion_main!(benches);
