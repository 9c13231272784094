mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use gqlrt_parser::ParseOptions;
use gqlrt_parser::Source;
use gqlrt_parser::lexer::Lexer;
use gqlrt_parser::token::TokenKind;
use std::sync::Arc;

// ─── Group 1: Lexing ─────────────────────────────────────

fn lex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    let source = Arc::new(Source::new(fixtures::COMPLEX_QUERY));
    group.throughput(Throughput::Bytes(source.body().len() as u64));

    group.bench_function("complex_query", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(&source);
            let mut count = 0usize;
            while let Ok(token) = lexer.next_token() {
                if token.kind == TokenKind::Eof {
                    break;
                }
                count += 1;
            }
            black_box(count)
        })
    });

    group.finish();
}

// ─── Group 2: Executable Document Parsing ─────────────────

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(gqlrt_parser::parse(fixtures::SIMPLE_QUERY, ParseOptions::default())))
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(gqlrt_parser::parse(fixtures::COMPLEX_QUERY, ParseOptions::default())))
    });

    group.bench_function("complex_query (no_location)", |b| {
        b.iter(|| {
            black_box(gqlrt_parser::parse(fixtures::COMPLEX_QUERY, ParseOptions::no_location()))
        })
    });

    for depth in [10, 50, 100] {
        let input = fixtures::deeply_nested_query(depth);
        group.bench_with_input(BenchmarkId::new("nested_depth", depth), &input, |b, input| {
            b.iter(|| black_box(gqlrt_parser::parse(input.as_str(), ParseOptions::default())))
        });
    }

    for count in [10, 100, 1000] {
        let input = fixtures::many_operations(count);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("many_operations", count), &input, |b, input| {
            b.iter(|| black_box(gqlrt_parser::parse(input.as_str(), ParseOptions::default())))
        });
    }

    group.finish();
}

// ─── Group 3: Printing ───────────────────────────────────

fn print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");
    let Ok(doc) = gqlrt_parser::parse(fixtures::COMPLEX_QUERY, ParseOptions::no_location()) else {
        return;
    };
    group.bench_function("complex_query", |b| b.iter(|| black_box(gqlrt_parser::print(&doc))));
    group.finish();
}

// ─── Group 4: Cross-Parser Comparison ────────────────────

fn compare_executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_executable_parse");

    let many = fixtures::many_operations(100);
    let inputs: &[(&str, &str)] = &[
        ("simple", fixtures::SIMPLE_QUERY),
        ("complex", fixtures::COMPLEX_QUERY),
        ("many_operations", many.as_str()),
    ];

    for &(label, input) in inputs {
        group.bench_with_input(BenchmarkId::new("gqlrt_parser", label), &input, |b, input| {
            b.iter(|| black_box(gqlrt_parser::parse(*input, ParseOptions::default())))
        });

        group.bench_with_input(BenchmarkId::new("graphql_parser", label), &input, |b, input| {
            b.iter(|| black_box(graphql_parser::query::parse_query::<String>(input)))
        });

        group.bench_with_input(BenchmarkId::new("apollo_parser", label), &input, |b, input| {
            b.iter(|| {
                let parser = apollo_parser::Parser::new(input);
                black_box(parser.parse())
            })
        });
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, lex, executable_parse, print, compare_executable_parse);
criterion_main!(benches);
