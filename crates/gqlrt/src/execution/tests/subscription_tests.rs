use crate::ExecutionArgs;
use crate::ExecutionResult;
use crate::FieldError;
use crate::FieldValue;
use crate::Schema;
use crate::execution::tests::document;
use crate::subscribe;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::ObjectType;
use futures::StreamExt;
use serde_json::json;

fn event_schema(events: Field) -> Schema {
    let event = ObjectType::builder("Event")
        .field("id", Field::new("Int"))
        .field("label", Field::new("String"))
        .build();
    let query = ObjectType::builder("Query").field("ok", Field::new("Boolean")).build();
    let subscription = ObjectType::builder("Subscription").field("events", events).build();
    Schema::builder()
        .query(query)
        .subscription(subscription)
        .add_type(event)
        .build()
        .unwrap()
}

fn event(id: i32) -> FieldValue {
    crate::Value::object([("id", id.into()), ("label", format!("event {id}").into())]).into()
}

async fn collect(schema: &Schema, query: &str) -> Vec<serde_json::Value> {
    let document = document(query);
    let stream = match subscribe(ExecutionArgs::new(schema, &document)).await {
        Ok(stream) => stream,
        Err(result) => panic!("subscription failed: {result}"),
    };
    stream.map(|result| result.to_json()).collect().await
}

#[tokio::test]
async fn each_event_produces_a_response() {
    let schema = event_schema(
        Field::new("Event")
            .argument("upTo", InputValue::new("Int").default_value(2))
            .resolve(|_, args, _| {
                let up_to = args.get_i64("upTo").unwrap_or(0) as i32;
                Ok(FieldValue::stream(futures::stream::iter((1..=up_to).map(|id| Ok(event(id))))))
            }),
    );

    assert_eq!(
        collect(&schema, "subscription { events(upTo: 3) { id } }").await,
        [
            json!({"data": {"events": {"id": 1}}}),
            json!({"data": {"events": {"id": 2}}}),
            json!({"data": {"events": {"id": 3}}}),
        ],
    );
    assert_eq!(
        collect(&schema, "subscription { renamed: events { label } }").await,
        [
            json!({"data": {"renamed": {"label": "event 1"}}}),
            json!({"data": {"renamed": {"label": "event 2"}}}),
        ],
    );
}

#[tokio::test]
async fn a_deferred_stream_is_awaited_first() {
    let schema = event_schema(Field::new("Event").resolve(|_, _, _| {
        Ok(FieldValue::deferred(async {
            Ok(FieldValue::stream(futures::stream::iter([Ok(event(7))])))
        }))
    }));
    assert_eq!(
        collect(&schema, "subscription { events { id } }").await,
        [json!({"data": {"events": {"id": 7}}})],
    );
}

#[tokio::test]
async fn failed_events_yield_null_data_with_an_error() {
    let schema = event_schema(Field::new("Event").resolve(|_, _, _| {
        Ok(FieldValue::stream(futures::stream::iter([
            Ok(event(1)),
            Err(FieldError::new("lost connection")),
        ])))
    }));
    assert_eq!(
        collect(&schema, "subscription { events { id } }").await,
        [
            json!({"data": {"events": {"id": 1}}}),
            json!({
                "data": {"events": null},
                "errors": [{
                    "message": "lost connection",
                    "locations": [{"line": 1, "column": 16}],
                    "path": ["events"],
                }],
            }),
        ],
    );
}

#[tokio::test]
async fn the_root_field_must_return_a_stream() {
    let schema = event_schema(Field::new("Event").resolve(|_, _, _| Ok(1.into())));
    let document = document("subscription { events { id } }");
    let Err(result) = subscribe(ExecutionArgs::new(&schema, &document)).await else {
        panic!("expected the subscription to fail");
    };
    assert_eq!(result.data, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Subscription field must return a stream. Received: 1.");
}

#[tokio::test]
async fn resolver_errors_fail_the_subscription() {
    let schema = event_schema(Field::new("Event").resolve(|_, _, _| Err(FieldError::new("denied"))));
    let document = document("subscription { events { id } }");
    let result: ExecutionResult = match subscribe(ExecutionArgs::new(&schema, &document)).await {
        Ok(_) => panic!("expected the subscription to fail"),
        Err(result) => result,
    };
    assert_eq!(
        result.to_json(),
        json!({"errors": [{"message": "denied", "locations": [{"line": 1, "column": 16}], "path": ["events"]}]}),
    );
}

#[tokio::test]
async fn schemas_without_subscriptions_reject_them() {
    let query = ObjectType::builder("Query").field("ok", Field::new("Boolean")).build();
    let schema = Schema::builder().query(query).build().unwrap();
    let document = document("subscription { ok }");
    let Err(result) = subscribe(ExecutionArgs::new(&schema, &document)).await else {
        panic!("expected the subscription to fail");
    };
    assert!(result.invalid);
    assert_eq!(result.errors[0].message, "Schema is not configured for subscriptions.");
}
