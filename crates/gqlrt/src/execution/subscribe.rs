use crate::GraphQLError;
use crate::Value;
use crate::execution::Deferred;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionResult;
use crate::execution::FieldResult;
use crate::execution::FieldValue;
use crate::execution::ResponsePath;
use crate::execution::executor::FieldContext;
use crate::execution::executor::collect_root_fields;
use crate::execution::executor::complete_value;
use crate::execution::executor::guard;
use crate::execution::executor::prepare;
use crate::execution::values::get_argument_values;
use crate::introspection::get_object_field_def;
use futures::StreamExt;
use futures::stream::LocalBoxStream;
use gqlrt_parser::ast;
use std::rc::Rc;

/// Starts a subscription.
///
/// The single root field's resolver must produce a
/// [`FieldValue::Stream`] (possibly behind a [`FieldValue::Deferred`]).
/// Each event of that stream is completed against the field's type and
/// the field's selection set, yielding one [`ExecutionResult`] per event.
///
/// Errors that prevent the stream from being created (an unusable
/// operation, invalid variables, a failing or non-stream resolver) are
/// returned as the `Err` result.
pub async fn subscribe<'a>(
    args: ExecutionArgs<'a>,
) -> Result<LocalBoxStream<'a, ExecutionResult>, ExecutionResult> {
    let (ctx, root_type) = prepare(args)?;
    let operation = ctx.operation;
    let fail = |err: GraphQLError| ExecutionResult {
        data: None,
        errors: vec![err],
        invalid: false,
    };

    let Some((key, field_asts)) = collect_root_fields(&ctx, root_type).into_iter().next() else {
        return Err(fail(
            GraphQLError::new("A subscription must select one top level field.")
                .at(operation.loc.as_ref()),
        ));
    };
    let Some(first) = field_asts.first().copied() else {
        return Err(fail(GraphQLError::new("A subscription must select one top level field.")));
    };
    let field_name = first.name.as_str();
    let Some(field_def) = get_object_field_def(ctx.schema, root_type, field_name) else {
        return Err(fail(
            GraphQLError::new(format!("The subscription field \"{field_name}\" is not defined."))
                .at(first.loc.as_ref()),
        ));
    };

    let path = ResponsePath::root().with(key);
    let field = FieldContext {
        parent_type: root_type,
        field_def,
        field_name,
        field_asts,
    };
    let source_stream = create_source_event_stream(&ctx, &field, &path)
        .await
        .map_err(fail)?;
    tracing::debug!(field = %field.coordinate(), "created subscription source stream");

    let base = ctx;
    let return_type = &field_def.ty;
    let asts: Rc<[&ast::Field]> = field.field_asts.into_iter().collect();
    let events = source_stream.then(move |event| {
        let ctx = base.fork();
        let asts = Rc::clone(&asts);
        let path = path.clone();
        async move {
            // The field context borrows this event's context, so it must be
            // gone before the context is finished.
            let data = {
                let field = Rc::new(FieldContext {
                    parent_type: root_type,
                    field_def,
                    field_name,
                    field_asts: asts.iter().map(|&ast| ast).collect(),
                });
                let completed = match event {
                    Ok(value) => complete_value(&ctx, Rc::clone(&field), return_type, path, value),
                    Err(err) => Deferred::Ready(Err(err.into_graphql_error(&field.field_asts, path.to_vec()))),
                };
                match guard(&ctx, return_type, completed).resolve().await {
                    Ok(value) => Value::object([(key, value)]),
                    Err(err) => {
                        ctx.record(err);
                        Value::Null
                    },
                }
            };
            ctx.finish(data)
        }
    });
    Ok(events.boxed_local())
}

async fn create_source_event_stream<'a>(
    ctx: &ExecutionContext<'a>,
    field: &FieldContext<'a>,
    path: &ResponsePath,
) -> Result<LocalBoxStream<'static, FieldResult>, GraphQLError> {
    let first = field.field_asts.first().copied();
    let arguments = first.map(|ast| ast.arguments.as_slice()).unwrap_or_default();
    let args = get_argument_values(ctx.schema, field.field_def.args(), arguments, &ctx.variables)
        .map_err(|message| field.error(message, path))?;

    let located = |err: crate::FieldError| err.into_graphql_error(&field.field_asts, path.to_vec());
    let value = match field.resolve(ctx, &ctx.root_value, &args, path).map_err(located)? {
        FieldValue::Deferred(future) => future.await.map_err(located)?,
        value => value,
    };

    match value {
        FieldValue::Stream(stream) => Ok(stream),
        other => Err(field.error(
            format!("Subscription field must return a stream. Received: {}.", other.describe()),
            path,
        )),
    }
}
