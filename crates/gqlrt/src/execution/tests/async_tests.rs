use crate::ExecutionArgs;
use crate::FieldError;
use crate::FieldValue;
use crate::Schema;
use crate::execute;
use crate::execute_sync;
use crate::execution::tests::document;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::TypeRef;
use serde_json::json;
use std::time::Duration;

fn later(value: FieldValue, delay_ms: u64) -> FieldValue {
    FieldValue::deferred(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(value)
    })
}

fn user_schema() -> Schema {
    let user = ObjectType::builder("User")
        .field(
            "name",
            Field::new("String").resolve(|source, _, _| {
                let name = source.as_value().and_then(|v| v.get("name")).cloned();
                Ok(later(name.into(), 5))
            }),
        )
        .field(
            "friends",
            Field::new(TypeRef::named("User").list()).resolve(|_, _, _| {
                Ok(later(
                    FieldValue::list([
                        later(crate::Value::object([("name", "b".into())]).into(), 10),
                        crate::Value::object([("name", "c".into())]).into(),
                    ]),
                    1,
                ))
            }),
        )
        .build();
    let query = ObjectType::builder("Query")
        .field(
            "me",
            Field::new("User")
                .resolve(|_, _, _| Ok(later(crate::Value::object([("name", "a".into())]).into(), 1))),
        )
        .field(
            "slow",
            Field::new("String").resolve(|_, _, _| {
                Ok(FieldValue::deferred(async {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Err(FieldError::new("timed out"))
                }))
            }),
        )
        .field("now", Field::new("Int").resolve(|_, _, _| Ok(1.into())))
        .build();
    Schema::builder().query(query).add_type(user).build().unwrap()
}

#[tokio::test]
async fn nested_deferred_values_complete_in_selection_order() {
    let schema = user_schema();
    let document = document("{ now me { name friends { name } } }");
    let result = execute(ExecutionArgs::new(&schema, &document)).await;
    assert_eq!(
        result.to_json(),
        json!({"data": {
            "now": 1,
            "me": {"name": "a", "friends": [{"name": "b"}, {"name": "c"}]},
        }}),
    );
}

#[tokio::test]
async fn deferred_errors_are_located_like_sync_ones() {
    let schema = user_schema();
    let document = document("{ now slow }");
    let result = execute(ExecutionArgs::new(&schema, &document)).await;
    assert_eq!(
        result.to_json(),
        json!({
            "data": {"now": 1, "slow": null},
            "errors": [{"message": "timed out", "locations": [{"line": 1, "column": 7}], "path": ["slow"]}],
        }),
    );
}

#[test]
fn execute_sync_drives_deferred_values_to_completion() {
    let query = ObjectType::builder("Query")
        .field(
            "answer",
            Field::new("Int").resolve(|_, _, _| {
                Ok(FieldValue::deferred(async {
                    Ok(FieldValue::deferred(async { Ok(42.into()) }))
                }))
            }),
        )
        .build();
    let schema = Schema::builder().query(query).build().unwrap();
    let document = document("{ answer }");
    let result = execute_sync(ExecutionArgs::new(&schema, &document));
    assert_eq!(result.to_json(), json!({"data": {"answer": 42}}));
}

#[tokio::test]
async fn siblings_wait_concurrently() {
    let query = ObjectType::builder("Query")
        .field("a", Field::new("Int").resolve(|_, _, _| Ok(later(1.into(), 100))))
        .field("b", Field::new("Int").resolve(|_, _, _| Ok(later(2.into(), 100))))
        .field("c", Field::new("Int").resolve(|_, _, _| Ok(later(3.into(), 100))))
        .build();
    let schema = Schema::builder().query(query).build().unwrap();
    let document = document("{ a b c }");

    let started = tokio::time::Instant::now();
    let result = execute(ExecutionArgs::new(&schema, &document)).await;
    assert_eq!(result.to_json(), json!({"data": {"a": 1, "b": 2, "c": 3}}));
    assert!(started.elapsed() < Duration::from_millis(250));
}
