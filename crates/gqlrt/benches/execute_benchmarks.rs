use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use gqlrt::ExecutionArgs;
use gqlrt::FieldValue;
use gqlrt::ParseOptions;
use gqlrt::Schema;
use gqlrt::Value;
use gqlrt::types::Field;
use gqlrt::types::InputValue;
use gqlrt::types::ObjectType;
use gqlrt::types::TypeRef;

/// `Node { id children(count) next }`, recursive through a thunk.
fn tree_schema() -> Schema {
    let node = ObjectType::builder("Node")
        .fields_thunk(|| {
            [
                (
                    "id".to_string(),
                    Field::new(TypeRef::named("Int").non_null())
                        .resolve(|source, _, _| Ok(source.as_value().cloned().unwrap_or(Value::Null).into())),
                ),
                (
                    "children".to_string(),
                    Field::new(TypeRef::named("Node").non_null().list())
                        .argument("count", InputValue::new("Int").default_value(3))
                        .resolve(|_, args, _| {
                            let count = args.get_i64("count").unwrap_or(0);
                            Ok(FieldValue::list((0..count).map(|i| Value::Int(i))))
                        }),
                ),
                (
                    "next".to_string(),
                    Field::new("Node").resolve(|_, _, _| {
                        Ok(FieldValue::deferred(async { Ok(Value::Int(0).into()) }))
                    }),
                ),
            ]
            .into_iter()
            .collect()
        })
        .build();
    let query = ObjectType::builder("Query")
        .field("root", Field::new("Node").resolve(|_, _, _| Ok(Value::Int(0).into())))
        .build();
    let schema = Schema::builder().query(query).add_type(node).build();
    match schema {
        Ok(schema) => schema,
        Err(err) => panic!("{err}"),
    }
}

fn wide_query(depth: usize) -> String {
    let mut selection = String::from("id");
    for _ in 0..depth {
        selection = format!("id children(count: 4) {{ {selection} }}");
    }
    format!("query Tree {{ root {{ {selection} }} }}")
}

fn deferred_query(depth: usize) -> String {
    let mut selection = String::from("id");
    for _ in 0..depth {
        selection = format!("id next {{ {selection} }}");
    }
    format!("{{ root {{ {selection} }} }}")
}

fn parse(query: &str) -> gqlrt::gqlrt_parser::ast::Document {
    match gqlrt::parse(query, ParseOptions::default()) {
        Ok(document) => document,
        Err(err) => panic!("{err}"),
    }
}

// ─── Group 1: Validation ─────────────────────────────────

fn validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let schema = tree_schema();

    for depth in [2, 4] {
        let document = parse(&wide_query(depth));
        group.bench_with_input(BenchmarkId::new("tree_depth", depth), &document, |b, document| {
            b.iter(|| black_box(gqlrt::validate(&schema, document)))
        });
    }

    let introspection = parse(
        "{ __schema { types { name kind fields { name type { name kind ofType { name kind } } } } } }",
    );
    group.bench_function("introspection", |b| {
        b.iter(|| black_box(gqlrt::validate(&schema, &introspection)))
    });

    group.finish();
}

// ─── Group 2: Execution ──────────────────────────────────

fn execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute");
    let schema = tree_schema();

    for depth in [2, 4] {
        let document = parse(&wide_query(depth));
        group.bench_with_input(BenchmarkId::new("tree_depth", depth), &document, |b, document| {
            b.iter(|| black_box(gqlrt::execute_sync(ExecutionArgs::new(&schema, document))))
        });
    }

    for depth in [8, 32] {
        let document = parse(&deferred_query(depth));
        group.bench_with_input(BenchmarkId::new("deferred_chain", depth), &document, |b, document| {
            b.iter(|| black_box(gqlrt::execute_sync(ExecutionArgs::new(&schema, document))))
        });
    }

    let introspection = parse(
        "{ __schema { types { name kind fields { name type { name kind ofType { name kind } } } } } }",
    );
    group.bench_function("introspection", |b| {
        b.iter(|| black_box(gqlrt::execute_sync(ExecutionArgs::new(&schema, &introspection))))
    });

    group.finish();
}

criterion_group!(benches, validate, execute);
criterion_main!(benches);
