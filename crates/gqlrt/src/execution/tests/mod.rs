mod async_tests;
mod non_null_tests;
mod subscription_tests;

use crate::ExecutionArgs;
use crate::ExecutionResult;
use crate::Schema;
use crate::execute_sync;
use crate::types::ObjectType;
use gqlrt_parser::ParseOptions;
use gqlrt_parser::ast;
use gqlrt_parser::parse;

pub(super) fn document(query: &str) -> ast::Document {
    parse(query, ParseOptions::default()).unwrap()
}

pub(super) fn schema(query: ObjectType) -> Schema {
    Schema::builder().query(query).build().unwrap()
}

/// Executes `query` synchronously with no root value or variables.
pub(super) fn run(schema: &Schema, query: &str) -> ExecutionResult {
    let document = document(query);
    execute_sync(ExecutionArgs::new(schema, &document))
}

pub(super) fn run_json(schema: &Schema, query: &str) -> serde_json::Value {
    run(schema, query).to_json()
}

/// Response keys of the top-level `data` object, in response order.
pub(super) fn data_keys(result: &ExecutionResult) -> Vec<String> {
    result
        .data
        .as_ref()
        .and_then(|data| data.as_object())
        .map(|entries| entries.keys().cloned().collect())
        .unwrap_or_default()
}
