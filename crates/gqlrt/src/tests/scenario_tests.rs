//! End-to-end runs over small schemas: parse, validate, execute.

use crate::ExecutionArgs;
use crate::FieldValue;
use crate::Schema;
use crate::Value;
use crate::execute_sync;
use crate::execution::ObjectSource;
use crate::parse;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::validate;
use gqlrt_parser::ParseOptions;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn run(schema: &Schema, query: &str, variables: serde_json::Value) -> Result<crate::ExecutionResult> {
    let document = parse(query, ParseOptions::default())?;
    let errors = validate(schema, &document);
    assert!(errors.is_empty(), "{errors:#?}");
    let variables = match Value::from(variables) {
        Value::Object(entries) => entries,
        _ => Default::default(),
    };
    Ok(execute_sync(ExecutionArgs::new(schema, &document).variables(variables)))
}

#[test]
fn non_null_items_null_the_list() -> Result<()> {
    let data_type = ObjectType::builder("DataType")
        .fields_thunk(|| {
            [
                ("nest".to_string(), Field::new("DataType").resolve(|_, _, _| Ok(1.into()))),
                (
                    "test".to_string(),
                    Field::new(TypeRef::named("Int").non_null().list())
                        .resolve(|_, _, _| Ok(FieldValue::list([Some(1), None, Some(2)]))),
                ),
            ]
            .into_iter()
            .collect()
        })
        .build();
    let schema = Schema::builder().query(data_type).build()?;

    let result = run(&schema, "{ nest { test } }", json!({}))?;
    assert_eq!(
        result.to_json(),
        json!({
            "data": {"nest": {"test": null}},
            "errors": [{
                "message": "Cannot return null for non-nullable field DataType.test.",
                "locations": [{"line": 1, "column": 10}],
                "path": ["nest", "test", 1],
            }],
        }),
    );
    Ok(())
}

#[test]
fn mutations_apply_in_order() -> Result<()> {
    let counter = Arc::new(Mutex::new(0));
    let query = ObjectType::builder("Query").field("ok", Field::new("Boolean")).build();
    let mutation = ObjectType::builder("Mutation")
        .field(
            "incr",
            Field::new("Int")
                .argument("n", InputValue::new("Int"))
                .resolve(move |_, args, _| {
                    let mut counter = counter.lock().map_err(|_| crate::FieldError::new("poisoned"))?;
                    *counter += args.get_i64("n").unwrap_or(0);
                    Ok((*counter).into())
                }),
        )
        .build();
    let schema = Schema::builder().query(query).mutation(mutation).build()?;

    let result = run(&schema, "mutation { a: incr(n:1) b: incr(n:1) c: incr(n:1) }", json!({}))?;
    assert_eq!(serde_json::to_string(&result)?, r#"{"data":{"a":1,"b":2,"c":3}}"#);
    Ok(())
}

#[test]
fn bad_variables_stop_execution() -> Result<()> {
    let called = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&called);
    let query = ObjectType::builder("Query")
        .field(
            "join",
            Field::new("String")
                .argument("list", InputValue::new(TypeRef::named("String").non_null().list().non_null()))
                .resolve(move |_, _, _| {
                    if let Ok(mut called) = flag.lock() {
                        *called = true;
                    }
                    Ok(FieldValue::null())
                }),
        )
        .build();
    let schema = Schema::builder().query(query).build()?;

    let result = run(
        &schema,
        "query Q($list: [String!]!) { join(list: $list) }",
        json!({"list": ["a", null, "b"]}),
    )?;
    assert!(result.invalid);
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.starts_with("Variable \"$list\" got invalid value"));
    assert_eq!(called.lock().map(|called| *called).ok(), Some(false));
    Ok(())
}

struct Cat;

impl ObjectSource for Cat {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some("Garfield".into()),
            "meows" => Some(true.into()),
            _ => None,
        }
    }

    fn type_name(&self) -> Option<&str> {
        Some("Cat")
    }
}

fn pet_schema() -> Result<Schema> {
    let pet = InterfaceType::builder("Pet").field("name", Field::new("String")).build();
    let dog = ObjectType::builder("Dog")
        .interface("Pet")
        .field("name", Field::new("String"))
        .field("barks", Field::new("Boolean"))
        .build();
    let cat = ObjectType::builder("Cat")
        .interface("Pet")
        .field("name", Field::new("String"))
        .field("meows", Field::new("Boolean"))
        .build();
    let query = ObjectType::builder("Query")
        .field("pet", Field::new("Pet").resolve(|_, _, _| Ok(FieldValue::object(Cat))))
        .build();
    Ok(Schema::builder().query(query).add_type(pet).add_types([dog, cat]).build()?)
}

#[test]
fn abstract_fields_complete_as_the_runtime_type() -> Result<()> {
    let schema = pet_schema()?;
    let result = run(
        &schema,
        "{ pet { ...on Dog { barks } ...on Cat { meows } name } }",
        json!({}),
    )?;
    assert_eq!(result.to_json(), json!({"data": {"pet": {"meows": true, "name": "Garfield"}}}));
    Ok(())
}

#[test]
fn fields_must_exist_on_the_fragment_type() -> Result<()> {
    let schema = pet_schema()?;
    let document = parse("fragment f on Dog { meowVolume }", ParseOptions::default())?;
    let field_errors: Vec<String> = validate(&schema, &document)
        .into_iter()
        .map(|err| err.message)
        .filter(|message| message.starts_with("Cannot query field"))
        .collect();
    assert_eq!(field_errors.len(), 1);
    assert!(field_errors[0].starts_with("Cannot query field 'meowVolume' on type 'Dog'"));
    Ok(())
}

#[test]
fn cyclic_fragments_terminate_in_the_executor() -> Result<()> {
    let schema = pet_schema()?;
    let document = parse(
        "{ pet { ...A } } fragment A on Pet { name ...B } fragment B on Pet { ...A name }",
        ParseOptions::default(),
    )?;
    assert!(!validate(&schema, &document).is_empty());
    let result = execute_sync(ExecutionArgs::new(&schema, &document));
    assert_eq!(result.to_json(), json!({"data": {"pet": {"name": "Garfield"}}}));
    Ok(())
}
