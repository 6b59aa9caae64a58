//! Parser benchmarks.
//!
//! Run with: `cargo bench --package jyaml-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jyaml_par::{parse, ParseOptions};

fn parse_source(source: &str) {
    parse(source, &ParseOptions::default()).expect("benchmark fixtures are valid JYAML");
}

fn bench_parser_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_flow");

    let source = r#"{"name": "example", "values": [1, 2, 3, 4, 5], "nested": {"a": true, "b": null}}"#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("small_object", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_block");

    let source = "name: example\nvalues:\n  - 1\n  - 2\n  - 3\nnested:\n  a: true\n  b: null\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("small_block", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_nested_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_nested_arrays");

    let source = "[[[[[1, 2, 3], [4, 5, 6]], [[7, 8], [9, 10]]]]]";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_arrays", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_comments");

    let source = r#"
# top-level config
{
  "app": "example", # name
  "port": 8080, # listen port
  "debug": false # verbose logging
}
"#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("commented_document", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

fn bench_parser_multiline_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_multiline_scalars");

    let source = "{\"description\": |\n  first line\n  second line\n  third line\n}";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("literal_block", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_large_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_large_document");

    let mut source = String::from("[\n");
    for i in 0..200 {
        source.push_str(&format!("  {{\"id\": {i}, \"name\": \"item-{i}\", \"active\": true}},\n"));
    }
    source.push_str("]\n");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("two_hundred_records", |b| {
        b.iter(|| parse_source(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_flow,
    bench_parser_block,
    bench_parser_nested_arrays,
    bench_parser_comments,
    bench_parser_multiline_scalars,
    bench_parser_large_document
);
criterion_main!(benches);
