use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use twiml::parser::scan_statements;
use twiml::{parse, Response};

/// Generate macro strings of different shapes for benchmarking
fn generate_macro(statements: usize, pattern: &str) -> String {
    let mut content = String::new();

    match pattern {
        "say_heavy" => {
            for i in 0..statements {
                content.push_str(&format!("{{say|Message number {i},voice:alice,language:en-GB}}"));
            }
        }
        "quoted" => {
            for i in 0..statements {
                content.push_str(&format!("{{say|`Item {i}, then item {}`,loop:2}}", i + 1));
            }
        }
        "ssml_mixed" => {
            for i in 0..statements {
                match i % 5 {
                    0 => content.push_str("{p|A new paragraph}"),
                    1 => content.push_str("{pause|500ms}"),
                    2 => content.push_str("{strong|Important}"),
                    3 => content.push_str(&format!("{{telephone|41555501{:02}}}", i % 100)),
                    4 => content.push_str("{whisper|quietly}"),
                    _ => unreachable!(),
                }
            }
        }
        "with_unknown" => {
            for i in 0..statements {
                if i % 4 == 0 {
                    content.push_str("{gather|1234}");
                } else {
                    content.push_str(&format!("{{dial|+1415555{:04},record:1}}", i % 10000));
                }
            }
        }
        _ => {
            for i in 0..statements {
                content.push_str(&format!("{{say|{i}}}"));
            }
        }
    }

    content
}

fn bench_scan_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_statements");

    for size in [10, 100, 1000] {
        let content = generate_macro(size, "say_heavy");
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("statements", size), &content, |b, content| {
            b.iter(|| black_box(scan_statements(black_box(content))))
        });
    }

    group.finish();
}

fn bench_parse_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_patterns");

    for pattern in ["say_heavy", "quoted", "ssml_mixed", "with_unknown"] {
        let content = generate_macro(500, pattern);
        group.throughput(Throughput::Elements(500));
        group.bench_with_input(BenchmarkId::new("pattern", pattern), &content, |b, content| {
            b.iter(|| black_box(parse(black_box(content))))
        });
    }

    group.finish();
}

fn bench_macro_to_document(c: &mut Criterion) {
    let content = generate_macro(200, "ssml_mixed");

    c.bench_function("macro_to_document", |b| {
        b.iter(|| {
            let response = Response::from_macro(black_box(&content)).expect("top-level verbs");
            black_box(response.encode())
        })
    });
}

criterion_group!(
    parsing_benches,
    bench_scan_statements,
    bench_parse_patterns,
    bench_macro_to_document
);

criterion_main!(parsing_benches);
