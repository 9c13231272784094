//! A server-side GraphQL runtime.
//!
//! A [`Schema`] is assembled from [type definitions](types) with
//! [`SchemaBuilder`]. Requests are parsed with [`parse`], checked with
//! [`validate`], and run with [`execute`] (or [`execute_sync`]), which
//! produces an [`ExecutionResult`] shaped like a GraphQL response.
//!
//! ```rust
//! use gqlrt::ExecutionArgs;
//! use gqlrt::Schema;
//! use gqlrt::types::Field;
//! use gqlrt::types::InputValue;
//! use gqlrt::types::ObjectType;
//!
//! let query = ObjectType::builder("Query")
//!     .field(
//!         "greet",
//!         Field::new("String")
//!             .argument("name", InputValue::new("String").default_value("world"))
//!             .resolve(|_, args, _| Ok(format!("hello {}", args.get_str("name").unwrap_or("?")).into())),
//!     )
//!     .build();
//! let schema = Schema::builder().query(query).build()?;
//!
//! let document = gqlrt::parse("{ greet(name: \"gqlrt\") }", Default::default())?;
//! assert!(gqlrt::validate(&schema, &document).is_empty());
//!
//! let result = gqlrt::execute_sync(ExecutionArgs::new(&schema, &document));
//! assert_eq!(result.to_json(), serde_json::json!({"data": {"greet": "hello gqlrt"}}));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod execution;
pub mod introspection;
mod schema;
pub mod types;
pub mod utilities;
pub mod validation;
mod value;

pub use error::FieldError;
pub use error::GraphQLError;
pub use error::PathSegment;
pub use execution::ExecutionArgs;
pub use execution::ExecutionResult;
pub use execution::FieldResult;
pub use execution::FieldValue;
pub use execution::execute;
pub use execution::execute_sync;
pub use execution::subscribe;
pub use gqlrt_parser;
pub use gqlrt_parser::ParseOptions;
pub use gqlrt_parser::SyntaxError;
pub use gqlrt_parser::parse;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use validation::validate;
pub use value::Value;

/// Parses, validates, and executes `source` in one call.
///
/// Syntax and validation errors come back as a data-less result marked
/// `invalid`, the same shape an unusable operation produces.
pub async fn graphql(
    schema: &Schema,
    source: &str,
    variables: impl IntoIterator<Item = (String, Value)>,
    operation_name: Option<&str>,
) -> ExecutionResult {
    let document = match parse(source, ParseOptions::default()) {
        Ok(document) => document,
        Err(err) => return ExecutionResult::from_errors(vec![err.into()]),
    };
    let errors = validate(schema, &document);
    if !errors.is_empty() {
        return ExecutionResult::from_errors(errors);
    }
    let mut args = ExecutionArgs::new(schema, &document).variables(variables);
    if let Some(name) = operation_name {
        args = args.operation_name(name);
    }
    execute(args).await
}

#[cfg(test)]
mod tests;
