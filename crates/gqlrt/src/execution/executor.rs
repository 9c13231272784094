use crate::GraphQLError;
use crate::Schema;
use crate::Value;
use crate::execution::Arguments;
use crate::execution::Deferred;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionResult;
use crate::execution::FieldResult;
use crate::execution::FieldValue;
use crate::execution::Next;
use crate::execution::ResolveInfo;
use crate::execution::ResponsePath;
use crate::execution::collect_fields::FieldAsts;
use crate::execution::collect_fields::FieldsByKey;
use crate::execution::collect_fields::collect_fields;
use crate::execution::middleware::ResolveFn;
use crate::execution::values::get_argument_values;
use crate::introspection::get_object_field_def;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use gqlrt_parser::ast;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::rc::Rc;

/// The outcome of completing one position: its value, or the error of a
/// null that is still propagating towards the nearest nullable position.
pub(crate) type Completed<'a> = Deferred<'a, Result<Value, GraphQLError>>;

/// Executes the selected operation of `args.document`.
///
/// Sibling fields are completed concurrently, mutation root fields one
/// after another. The future is local to the calling thread.
pub async fn execute(args: ExecutionArgs<'_>) -> ExecutionResult {
    let (ctx, root_type) = match prepare(args) {
        Ok(prepared) => prepared,
        Err(result) => return result,
    };
    let data = execute_operation(&ctx, root_type).resolve().await;
    ctx.finish(data)
}

/// [`execute`] for callers without an async runtime. Returns without
/// polling anything when every resolver answered synchronously; otherwise
/// blocks the current thread until the execution completes.
pub fn execute_sync(args: ExecutionArgs<'_>) -> ExecutionResult {
    let (ctx, root_type) = match prepare(args) {
        Ok(prepared) => prepared,
        Err(result) => return result,
    };
    let data = match execute_operation(&ctx, root_type) {
        Deferred::Ready(data) => data,
        Deferred::Pending(future) => futures::executor::block_on(future),
    };
    ctx.finish(data)
}

/// Reads the field's response name off the source: an entry of an object
/// value, or [`ObjectSource::field`](crate::execution::ObjectSource::field).
/// Callables found there are invoked.
pub fn default_resolver(source: &FieldValue, _args: &Arguments, info: &ResolveInfo<'_>) -> FieldResult {
    let value = match source {
        FieldValue::Value(Value::Object(entries)) => {
            entries.get(info.field_name).cloned().map(FieldValue::Value)
        },
        FieldValue::Object(object) => object.field(info.field_name),
        _ => None,
    };
    match value {
        Some(FieldValue::Callable(call)) => call(),
        Some(value) => Ok(value),
        None => Ok(FieldValue::null()),
    }
}

pub(crate) fn prepare(
    args: ExecutionArgs<'_>,
) -> Result<(ExecutionContext<'_>, &ObjectType), ExecutionResult> {
    let ctx = ExecutionContext::new(args)?;
    let root_type = operation_root_type(ctx.schema, ctx.operation)
        .map_err(|err| ExecutionResult::from_errors(vec![err]))?;
    Ok((ctx, root_type))
}

fn operation_root_type<'a>(
    schema: &'a Schema,
    operation: &ast::OperationDefinition,
) -> Result<&'a ObjectType, GraphQLError> {
    let root_type = match operation.operation {
        ast::OperationType::Query => Some(schema.query_type()),
        ast::OperationType::Mutation => schema.mutation_type(),
        ast::OperationType::Subscription => schema.subscription_type(),
    };
    root_type.map(|ty| &**ty).ok_or_else(|| {
        GraphQLError::new(format!("Schema is not configured for {}s.", operation.operation))
            .at(operation.loc.as_ref())
    })
}

pub(crate) fn collect_root_fields<'a>(
    ctx: &ExecutionContext<'a>,
    root_type: &ObjectType,
) -> FieldsByKey<'a> {
    let operation = ctx.operation;
    let mut fields = FieldsByKey::new();
    let mut visited = HashSet::new();
    collect_fields(ctx, root_type, &operation.selection_set, &mut fields, &mut visited);
    fields
}

fn execute_operation<'a>(ctx: &'a ExecutionContext<'a>, root_type: &'a ObjectType) -> Deferred<'a, Value> {
    let fields = collect_root_fields(ctx, root_type);
    let source = Rc::clone(&ctx.root_value);
    let path = ResponsePath::root();
    let completed = match ctx.operation.operation {
        ast::OperationType::Mutation => execute_fields_serially(ctx, root_type, source, fields, path),
        _ => execute_fields(ctx, root_type, source, fields, path),
    };
    completed.map(move |result| {
        result.unwrap_or_else(|err| {
            ctx.record(err);
            Value::Null
        })
    })
}

/// Resolves every field of `fields` at once and joins them into an object
/// in response-key order.
fn execute_fields<'a>(
    ctx: &'a ExecutionContext<'a>,
    parent_type: &'a ObjectType,
    source: Rc<FieldValue>,
    fields: FieldsByKey<'a>,
    path: ResponsePath,
) -> Completed<'a> {
    let mut keys = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    for (key, field_asts) in fields {
        if let Some(completed) = resolve_field(ctx, parent_type, &source, field_asts, path.with(key)) {
            keys.push(key);
            values.push(completed);
        }
    }

    Deferred::join_all(values).map(move |results| {
        let mut object = IndexMap::with_capacity(keys.len());
        for (key, result) in keys.into_iter().zip(results) {
            object.insert(key.to_string(), result?);
        }
        Ok(Value::Object(object))
    })
}

/// Like [`execute_fields`], but each field is resolved only after the
/// previous one has completed.
fn execute_fields_serially<'a>(
    ctx: &'a ExecutionContext<'a>,
    parent_type: &'a ObjectType,
    source: Rc<FieldValue>,
    fields: FieldsByKey<'a>,
    path: ResponsePath,
) -> Completed<'a> {
    let initial: Deferred<'a, Result<IndexMap<String, Value>, GraphQLError>> =
        Deferred::Ready(Ok(IndexMap::new()));

    fields
        .into_iter()
        .fold(initial, |previous, (key, field_asts)| {
            let source = Rc::clone(&source);
            let field_path = path.with(key);
            previous.then(move |result| {
                let mut object = match result {
                    Ok(object) => object,
                    Err(err) => return Deferred::Ready(Err(err)),
                };
                match resolve_field(ctx, parent_type, &source, field_asts, field_path) {
                    Some(completed) => completed.map(move |result| {
                        object.insert(key.to_string(), result?);
                        Ok(object)
                    }),
                    None => Deferred::Ready(Ok(object)),
                }
            })
        })
        .map(|result| result.map(Value::Object))
}

/// Resolves and completes one response key. `None` when the parent type
/// has no such field, in which case the key is left out of the response.
fn resolve_field<'a>(
    ctx: &'a ExecutionContext<'a>,
    parent_type: &'a ObjectType,
    source: &FieldValue,
    field_asts: FieldAsts<'a>,
    path: ResponsePath,
) -> Option<Completed<'a>> {
    let first = *field_asts.first()?;
    let field_name = first.name.as_str();
    let field_def = get_object_field_def(ctx.schema, parent_type, field_name)?;
    let field = Rc::new(FieldContext {
        parent_type,
        field_def,
        field_name,
        field_asts,
    });
    tracing::trace!(field = %field.coordinate(), path = ?path, "resolving field");

    let resolved = match get_argument_values(ctx.schema, field_def.args(), &first.arguments, &ctx.variables) {
        Ok(args) => field
            .resolve(ctx, source, &args, &path)
            .map_err(|err| err.into_graphql_error(&field.field_asts, path.to_vec())),
        Err(message) => Err(field.error(message, &path)),
    };

    let return_type = &field_def.ty;
    let completed = match resolved {
        Ok(value) => complete_value(ctx, Rc::clone(&field), return_type, path, value),
        Err(err) => Deferred::Ready(Err(err)),
    };
    Some(guard(ctx, return_type, completed))
}

/// Settles errors at nullable positions: the error is recorded once and the
/// position becomes null. At non-null positions the error keeps
/// propagating.
pub(crate) fn guard<'a>(
    ctx: &'a ExecutionContext<'a>,
    return_type: &TypeRef,
    completed: Completed<'a>,
) -> Completed<'a> {
    if return_type.is_non_null() {
        return completed;
    }
    completed.map(move |result| {
        result.or_else(|err| {
            ctx.record(err);
            Ok(Value::Null)
        })
    })
}

/// The field being completed, shared by the completion of its list items
/// and nested values.
pub(crate) struct FieldContext<'a> {
    pub parent_type: &'a ObjectType,
    pub field_def: &'a Field,
    pub field_name: &'a str,
    pub field_asts: FieldAsts<'a>,
}

impl<'a> FieldContext<'a> {
    pub fn coordinate(&self) -> String {
        format!("{}.{}", self.parent_type.name(), self.field_name)
    }

    pub fn error(&self, message: impl Into<String>, path: &ResponsePath) -> GraphQLError {
        GraphQLError::new(message)
            .at_all(self.field_asts.iter().map(|field| field.loc.as_ref()))
            .with_path(path.to_vec())
    }

    pub fn info<'i>(&'i self, ctx: &'i ExecutionContext<'a>, path: &ResponsePath) -> ResolveInfo<'i> {
        ResolveInfo {
            field_name: self.field_name,
            field_asts: &self.field_asts,
            return_type: &self.field_def.ty,
            parent_type: self.parent_type,
            schema: ctx.schema,
            fragments: &ctx.fragments,
            root_value: &ctx.root_value,
            operation: ctx.operation,
            variable_values: &ctx.variables,
            path: path.clone(),
            context: ctx.context,
        }
    }

    /// Calls the field's resolver (or the default one) through the
    /// execution's middleware.
    pub fn resolve(
        &self,
        ctx: &ExecutionContext<'a>,
        source: &FieldValue,
        args: &Arguments,
        path: &ResponsePath,
    ) -> FieldResult {
        let info = self.info(ctx, path);
        let resolver: ResolveFn<'_> = match self.field_def.resolver() {
            Some(resolver) => &**resolver,
            None => &default_resolver,
        };
        Next::new(&ctx.middleware, resolver).run(source, args, &info)
    }
}

pub(crate) fn complete_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    field: Rc<FieldContext<'a>>,
    return_type: &'a TypeRef,
    path: ResponsePath,
    value: FieldValue,
) -> Completed<'a> {
    let value = match value {
        FieldValue::Deferred(future) => {
            return Deferred::pending(async move {
                match future.await {
                    Ok(value) => complete_value(ctx, field, return_type, path, value).resolve().await,
                    Err(err) => Err(err.into_graphql_error(&field.field_asts, path.to_vec())),
                }
            });
        },
        value => value,
    };

    match return_type {
        TypeRef::NonNull(inner) => {
            let checked_field = Rc::clone(&field);
            let checked_path = path.clone();
            complete_value(ctx, field, inner, path, value).map(move |result| {
                let value = result?;
                if value.is_null() {
                    return Err(checked_field.error(
                        format!(
                            "Cannot return null for non-nullable field {}.",
                            checked_field.coordinate(),
                        ),
                        &checked_path,
                    ));
                }
                Ok(value)
            })
        },

        _ if value.is_null() => Deferred::Ready(Ok(Value::Null)),

        TypeRef::List(item_type) => complete_list_value(ctx, field, item_type, path, value),

        TypeRef::Named(type_name) => match ctx.schema.get_type(type_name) {
            Some(named_type @ (GraphQLType::Scalar(_) | GraphQLType::Enum(_))) => {
                Deferred::Ready(complete_leaf_value(&field, named_type, &path, value))
            },
            Some(GraphQLType::Object(object_type)) => {
                complete_object_value(ctx, field, object_type, path, value)
            },
            Some(abstract_type @ (GraphQLType::Interface(_) | GraphQLType::Union(_))) => {
                match resolve_runtime_type(ctx, &field, abstract_type, &path, &value) {
                    Ok(object_type) => complete_object_value(ctx, field, object_type, path, value),
                    Err(err) => Deferred::Ready(Err(err)),
                }
            },
            Some(GraphQLType::InputObject(_)) | None => Deferred::Ready(Err(field.error(
                format!("Cannot complete a value of type \"{type_name}\"."),
                &path,
            ))),
        },
    }
}

fn complete_list_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    field: Rc<FieldContext<'a>>,
    item_type: &'a TypeRef,
    path: ResponsePath,
    value: FieldValue,
) -> Completed<'a> {
    let items: Vec<FieldValue> = match value {
        FieldValue::List(items) => items,
        FieldValue::Iter(items) => items.collect(),
        FieldValue::Value(Value::List(items)) => items.into_iter().map(FieldValue::Value).collect(),
        _ => {
            return Deferred::Ready(Err(field.error(
                format!(
                    "User Error: expected iterable, but did not find one for field {}.",
                    field.coordinate(),
                ),
                &path,
            )));
        },
    };

    let completed: Vec<Completed<'a>> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let item_completed = complete_value(ctx, Rc::clone(&field), item_type, path.with(index), item);
            guard(ctx, item_type, item_completed)
        })
        .collect();

    Deferred::join_all(completed).map(|results| {
        results
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    })
}

fn complete_leaf_value(
    field: &FieldContext<'_>,
    leaf_type: &GraphQLType,
    path: &ResponsePath,
    value: FieldValue,
) -> Result<Value, GraphQLError> {
    let value = match value {
        FieldValue::Value(value) => value,
        other => {
            return Err(field.error(
                format!(
                    "Expected a value of type \"{}\" but received: {}",
                    leaf_type.name(),
                    other.describe(),
                ),
                path,
            ));
        },
    };
    match leaf_type {
        GraphQLType::Scalar(scalar) => scalar.serialize(&value).map_err(|message| field.error(message, path)),
        GraphQLType::Enum(enum_type) => enum_type.serialize(&value).ok_or_else(|| {
            field.error(
                format!(
                    "Expected a value of type \"{}\" but received: {}",
                    enum_type.name(),
                    value,
                ),
                path,
            )
        }),
        _ => Ok(Value::Null),
    }
}

fn complete_object_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    field: Rc<FieldContext<'a>>,
    object_type: &'a ObjectType,
    path: ResponsePath,
    value: FieldValue,
) -> Completed<'a> {
    if let Some(is_type_of) = object_type.is_type_of() {
        let info = field.info(ctx, &path);
        if !is_type_of(&value, &info) {
            return Deferred::Ready(Err(field.error(
                format!(
                    "Expected value of type \"{}\" but got: {}.",
                    object_type.name(),
                    value.describe(),
                ),
                &path,
            )));
        }
    }

    let mut sub_fields = FieldsByKey::new();
    let mut visited = HashSet::new();
    for &field_ast in field.field_asts.iter() {
        if let Some(selection_set) = &field_ast.selection_set {
            collect_fields(ctx, object_type, selection_set, &mut sub_fields, &mut visited);
        }
    }
    execute_fields(ctx, object_type, Rc::new(value), sub_fields, path)
}

/// The object type of a value at an interface or union position: decided
/// by the abstract type's `resolve_type`, else by the first possible type
/// whose `is_type_of` accepts the value, else by the type name the value
/// reports for itself.
fn resolve_runtime_type<'a>(
    ctx: &'a ExecutionContext<'a>,
    field: &FieldContext<'a>,
    abstract_type: &'a GraphQLType,
    path: &ResponsePath,
    value: &FieldValue,
) -> Result<&'a ObjectType, GraphQLError> {
    let schema = ctx.schema;
    let info = field.info(ctx, path);
    let resolve_type = match abstract_type {
        GraphQLType::Interface(interface) => interface.resolve_type(),
        GraphQLType::Union(union) => union.resolve_type(),
        _ => None,
    };

    let runtime_name = match resolve_type {
        Some(resolve_type) => resolve_type(value, &info),
        None => schema
            .possible_types(abstract_type.name())
            .iter()
            .find(|candidate| {
                candidate
                    .is_type_of()
                    .is_some_and(|is_type_of| is_type_of(value, &info))
            })
            .map(|candidate| candidate.name().to_string())
            .or_else(|| value.reported_type_name().map(str::to_string)),
    };

    let not_an_object = |received: &str| {
        field.error(
            format!(
                "Abstract type {} must resolve to an Object type at runtime for field {} with \
                value {}, received \"{received}\".",
                abstract_type.name(),
                field.coordinate(),
                value.describe(),
            ),
            path,
        )
    };
    let Some(runtime_name) = runtime_name else {
        return Err(not_an_object("None"));
    };
    let Some(GraphQLType::Object(runtime_type)) = schema.get_type(&runtime_name) else {
        return Err(not_an_object(&runtime_name));
    };
    if !schema.is_possible_type(abstract_type.name(), runtime_type.name()) {
        return Err(field.error(
            format!(
                "Runtime Object type \"{}\" is not a possible type for \"{}\".",
                runtime_type.name(),
                abstract_type.name(),
            ),
            path,
        ));
    }
    Ok(&**runtime_type)
}
