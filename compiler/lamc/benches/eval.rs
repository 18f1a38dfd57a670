#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Evaluation benchmarks.
//!
//! Measures parse plus evaluation of Church arithmetic at growing sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lamc::{evaluate_source, Mode, RunOptions};

const ARITHMETIC: &str = r"
two = \f.\x.(f (f x))
mul = \m.\n.\f.(m (n f))
succ = \n.\f.\x.(f (n f x))
";

/// Church numeral source for `n`.
fn numeral(n: usize) -> String {
    format!("\\f.\\x.{}x{}", "(f ".repeat(n), ")".repeat(n))
}

/// `2^k + 1`, built by repeated doubling and printed as a byte.
fn doubling(k: usize) -> String {
    let mut expr = String::from("two");
    for _ in 1..k {
        expr = format!("(mul two {expr})");
    }
    format!("{ARITHMETIC}\n(PRINT_BYTE (succ {expr}))")
}

fn bench_numerals(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval/numeral");
    for n in [10, 100, 1_000] {
        let source = format!("(PRINT_BYTE {})", numeral(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, source| {
            b.iter(|| {
                black_box(evaluate_source(source, &RunOptions::new(Mode::Output), b"").unwrap())
            });
        });
    }
    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval/doubling");
    for k in [4, 8, 12] {
        let source = doubling(k);
        group.bench_with_input(BenchmarkId::from_parameter(k), &source, |b, source| {
            b.iter(|| {
                black_box(evaluate_source(source, &RunOptions::new(Mode::Output), b"").unwrap())
            });
        });
    }
    group.finish();
}

fn bench_parsed(c: &mut Criterion) {
    let source = doubling(12);
    c.bench_function("parsed/doubling_12", |b| {
        b.iter(|| black_box(evaluate_source(&source, &RunOptions::new(Mode::Parsed), b"").unwrap()));
    });
}

criterion_group!(benches, bench_numerals, bench_arithmetic, bench_parsed);
criterion_main!(benches);
