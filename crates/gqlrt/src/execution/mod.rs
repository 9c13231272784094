//! Executing operations against a [`Schema`](crate::Schema).
//!
//! Resolvers are plain functions returning a [`FieldValue`]. Anything that
//! is not available yet is returned as a [`FieldValue::Deferred`]; the
//! executor joins deferred siblings concurrently on the calling thread and
//! never spawns tasks.

mod arguments;
mod collect_fields;
mod deferred;
mod execution_args;
mod execution_context;
mod execution_result;
mod executor;
mod field_value;
mod middleware;
mod resolve_info;
mod subscribe;
mod values;

pub use arguments::Arguments;
pub use deferred::Deferred;
pub use execution_args::ExecutionArgs;
pub(crate) use execution_context::ExecutionContext;
pub use execution_result::ExecutionResult;
pub use executor::default_resolver;
pub use executor::execute;
pub use executor::execute_sync;
pub use field_value::AsAny;
pub use field_value::FieldResult;
pub use field_value::FieldValue;
pub use field_value::ObjectSource;
pub use middleware::Middleware;
pub use middleware::Next;
pub use resolve_info::ResolveInfo;
pub use resolve_info::ResponsePath;
pub use subscribe::subscribe;

#[cfg(test)]
mod tests;
