use std::hint::black_box;

use colorvars::{format_source, process_formatted, process_stylesheet, ColorVarsConfig, SrgbResolver};
use criterion::{criterion_group, criterion_main, Criterion};

const PALETTE: [&str; 6] = [
    "#3366CC",
    "#36c",
    "rgb(51, 102, 204)",
    "#fff",
    "rgb(0,0,0)",
    "#c0ffee",
];

/// A few thousand rules cycling through a small palette, some of them
/// wrapped in media blocks.
fn synthetic_sheet(rules: usize) -> String {
    let mut css = String::with_capacity(rules * 64);
    for i in 0..rules {
        let color = PALETTE[i % PALETTE.len()];
        let background = PALETTE[(i + 3) % PALETTE.len()];
        let rule = format!(
            ".c{i}{{color:{color};background:{background};border:1px solid {color}}}\n"
        );
        if i % 10 == 0 {
            css.push_str(&format!("@media (min-width:{i}px){{{rule}}}\n"));
        } else {
            css.push_str(&rule);
        }
    }
    css
}

fn format_bench(c: &mut Criterion) {
    let cfg = ColorVarsConfig::default();
    let sheet = synthetic_sheet(2_000);
    c.bench_function("format_synthetic_2k", |b| {
        b.iter(|| {
            let out = format_source(black_box(&sheet), &cfg).expect("bench format");
            black_box(out);
        });
    });
}

fn dedup_bench(c: &mut Criterion) {
    let cfg = ColorVarsConfig::default();
    let formatted = format_source(&synthetic_sheet(2_000), &cfg).expect("format succeeds");
    c.bench_function("dedup_formatted_2k", |b| {
        b.iter(|| {
            let out = process_formatted(black_box(&formatted), &cfg, &SrgbResolver)
                .expect("bench dedup");
            black_box(out);
        });
    });
}

fn pipeline_bench(c: &mut Criterion) {
    let cfg = ColorVarsConfig::default();
    let sheet = synthetic_sheet(2_000);
    c.bench_function("process_stylesheet_2k", |b| {
        b.iter(|| {
            let out = process_stylesheet(black_box(&sheet), &cfg).expect("bench pipeline");
            black_box(out);
        });
    });
}

criterion_group!(benches, format_bench, dedup_bench, pipeline_bench);
criterion_main!(benches);
