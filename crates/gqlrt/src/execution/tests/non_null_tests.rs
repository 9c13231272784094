use crate::FieldError;
use crate::FieldValue;
use crate::PathSegment;
use crate::Schema;
use crate::execution::tests::run;
use crate::execution::tests::run_json;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::TypeRef;
use serde_json::json;

fn non_null(name: &str) -> TypeRef {
    TypeRef::named(name).non_null()
}

#[test]
fn null_list_item_nulls_the_nearest_nullable_parent() {
    let nest = ObjectType::builder("Nest")
        .field(
            "test",
            Field::new(non_null("String").list().non_null())
                .resolve(|_, _, _| Ok(FieldValue::list([Some("a"), None, Some("b")]))),
        )
        .build();
    let query = ObjectType::builder("Query")
        .field("nest", Field::new("Nest").resolve(|_, _, _| Ok(1.into())))
        .build();
    let schema = Schema::builder().query(query).add_type(nest).build().unwrap();

    let result = run(&schema, "{ nest { test } }");
    assert_eq!(result.data.clone().map(serde_json::Value::from), Some(json!({"nest": null})));
    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.message, "Cannot return null for non-nullable field Nest.test.");
    assert_eq!(
        error.locations.iter().map(|loc| (loc.line, loc.column)).collect::<Vec<_>>(),
        [(1, 10)],
    );
    assert_eq!(
        error.path.as_deref(),
        Some([PathSegment::from("nest"), PathSegment::from("test"), PathSegment::from(1usize)].as_slice()),
    );
}

#[test]
fn null_at_a_non_null_root_field_nulls_data() {
    let query = ObjectType::builder("Query")
        .field("name", Field::new(non_null("String")).resolve(|_, _, _| Ok(FieldValue::null())))
        .field("other", Field::new("String").resolve(|_, _, _| Ok("x".into())))
        .build();
    let schema = Schema::builder().query(query).build().unwrap();

    let result = run(&schema, "{ other name }");
    assert_eq!(result.data, Some(crate::Value::Null));
    assert!(!result.invalid);
    assert_eq!(
        result.to_json(),
        json!({
            "data": null,
            "errors": [{
                "message": "Cannot return null for non-nullable field Query.name.",
                "locations": [{"line": 1, "column": 9}],
                "path": ["name"],
            }],
        }),
    );
}

#[test]
fn propagation_crosses_several_non_null_levels_with_one_error() {
    let inner = ObjectType::builder("Inner")
        .field("value", Field::new(non_null("Int")).resolve(|_, _, _| Ok(FieldValue::null())))
        .build();
    let middle = ObjectType::builder("Middle")
        .field("inner", Field::new(non_null("Inner")).resolve(|_, _, _| Ok(1.into())))
        .build();
    let outer = ObjectType::builder("Outer")
        .field("middle", Field::new(non_null("Middle")).resolve(|_, _, _| Ok(1.into())))
        .field("sibling", Field::new("Int").resolve(|_, _, _| Ok(7.into())))
        .build();
    let query = ObjectType::builder("Query")
        .field("outer", Field::new("Outer").resolve(|_, _, _| Ok(1.into())))
        .field("kept", Field::new("Int").resolve(|_, _, _| Ok(2.into())))
        .build();
    let schema = Schema::builder()
        .query(query)
        .add_types([inner, middle, outer])
        .build()
        .unwrap();

    let result = run(&schema, "{ outer { sibling middle { inner { value } } } kept }");
    assert_eq!(result.data.clone().map(serde_json::Value::from), Some(json!({"outer": null, "kept": 2})));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Cannot return null for non-nullable field Inner.value.");
    assert_eq!(
        result.errors[0].path.as_deref(),
        Some(
            [
                PathSegment::from("outer"),
                PathSegment::from("middle"),
                PathSegment::from("inner"),
                PathSegment::from("value"),
            ]
            .as_slice()
        ),
    );
}

#[test]
fn resolver_error_at_a_non_null_position_is_reported_once() {
    let item = ObjectType::builder("Item")
        .field("id", Field::new(non_null("ID")).resolve(|_, _, _| Err(FieldError::new("no id"))))
        .build();
    let query = ObjectType::builder("Query")
        .field("item", Field::new("Item").resolve(|_, _, _| Ok(1.into())))
        .build();
    let schema = Schema::builder().query(query).add_type(item).build().unwrap();

    assert_eq!(
        run_json(&schema, "{ item { id } }"),
        json!({
            "data": {"item": null},
            "errors": [{"message": "no id", "locations": [{"line": 1, "column": 10}], "path": ["item", "id"]}],
        }),
    );
}

#[test]
fn nullable_list_items_absorb_item_errors() {
    let query = ObjectType::builder("Query")
        .field(
            "items",
            Field::new(TypeRef::named("Int").list().non_null()).resolve(|_, _, _| {
                Ok(FieldValue::list([
                    FieldValue::from(1),
                    FieldValue::from("not a number"),
                    FieldValue::from(3),
                ]))
            }),
        )
        .build();
    let schema = Schema::builder().query(query).build().unwrap();

    let result = run(&schema, "{ items }");
    assert_eq!(result.data.clone().map(serde_json::Value::from), Some(json!({"items": [1, null, 3]})));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].path.as_deref(),
        Some([PathSegment::from("items"), PathSegment::from(1usize)].as_slice()),
    );
}
