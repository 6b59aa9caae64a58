//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package jyaml-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jyaml_lex::{Lexer, LexerConfig};

fn token_count(source: &str) -> usize {
    Lexer::new(source, LexerConfig::default())
        .expect("benchmark fixtures are valid JYAML")
        .count()
}

fn bench_lexer_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_flow");

    let source = r#"{"name": "example", "values": [1, 2, 3, 4, 5], "nested": {"a": true, "b": null}}"#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("small_object", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_block");

    let source = "name: example\nvalues:\n  - 1\n  - 2\n  - 3\nnested:\n  a: true\n  b: null\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("small_block", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("\"hello\"")))
    });

    group.bench_function("string_with_escapes", |b| {
        b.iter(|| token_count(black_box("\"a\\nb\\tc\\u0041\"")))
    });

    group.finish();
}

fn bench_lexer_multiline(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_multiline");

    let source = "|\n  line one\n  line two\n  line three\n  line four\n";
    group.bench_function("literal_block", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| token_count(black_box("123456")))
    });

    group.bench_function("float_with_exponent", |b| {
        b.iter(|| token_count(black_box("-3.14159e-10")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_flow,
    bench_lexer_block,
    bench_lexer_strings,
    bench_lexer_multiline,
    bench_lexer_numbers
);
criterion_main!(benches);
