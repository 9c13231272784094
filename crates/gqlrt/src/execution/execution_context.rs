use crate::GraphQLError;
use crate::Schema;
use crate::Value;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionResult;
use crate::execution::FieldValue;
use crate::execution::Middleware;
use crate::execution::values::get_variable_values;
use gqlrt_parser::ast;
use indexmap::IndexMap;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

/// The per-execution state shared by every field of one response.
///
/// Only `errors` changes once execution starts; everything else is fixed
/// when the context is built.
pub(crate) struct ExecutionContext<'a> {
    pub schema: &'a Schema,
    pub fragments: Rc<HashMap<&'a str, &'a ast::FragmentDefinition>>,
    pub root_value: Rc<FieldValue>,
    pub operation: &'a ast::OperationDefinition,
    pub variables: Rc<IndexMap<String, Value>>,
    pub context: &'a dyn Any,
    pub middleware: Rc<[Arc<dyn Middleware>]>,
    errors: RefCell<Vec<GraphQLError>>,
}

impl<'a> ExecutionContext<'a> {
    /// Selects the operation and coerces its variables. Failures come back
    /// as the (data-less) result to return.
    pub fn new(args: ExecutionArgs<'a>) -> Result<Self, ExecutionResult> {
        let ExecutionArgs {
            schema,
            document,
            root_value,
            context,
            variables,
            operation_name,
            middleware,
        } = args;

        let operation = select_operation(document, operation_name.as_deref())
            .map_err(|err| ExecutionResult::from_errors(vec![err]))?;
        tracing::debug!(
            operation = operation.name_str().unwrap_or("<anonymous>"),
            kind = %operation.operation,
            "selected operation",
        );

        let variables = get_variable_values(schema, &operation.variable_definitions, &variables)
            .map_err(ExecutionResult::from_errors)?;

        let fragments = document
            .fragments()
            .map(|fragment| (fragment.name.as_str(), fragment))
            .collect();

        Ok(Self {
            schema,
            fragments: Rc::new(fragments),
            root_value: Rc::new(root_value),
            operation,
            variables: Rc::new(variables),
            context,
            middleware: middleware.into(),
            errors: RefCell::new(vec![]),
        })
    }

    /// A context over the same operation with an empty error list, for one
    /// subscription event.
    pub fn fork(&self) -> Self {
        Self {
            schema: self.schema,
            fragments: Rc::clone(&self.fragments),
            root_value: Rc::clone(&self.root_value),
            operation: self.operation,
            variables: Rc::clone(&self.variables),
            context: self.context,
            middleware: Rc::clone(&self.middleware),
            errors: RefCell::new(vec![]),
        }
    }

    pub fn record(&self, error: GraphQLError) {
        self.errors.borrow_mut().push(error);
    }

    pub fn finish(self, data: Value) -> ExecutionResult {
        ExecutionResult::from_data(data, self.errors.into_inner())
    }
}

fn select_operation<'d>(
    document: &'d ast::Document,
    operation_name: Option<&str>,
) -> Result<&'d ast::OperationDefinition, GraphQLError> {
    let mut operations = document.operations();
    let first = operations
        .next()
        .ok_or_else(|| GraphQLError::new("Must provide an operation."))?;
    if operations.next().is_none() {
        return Ok(first);
    }

    let Some(name) = operation_name else {
        return Err(GraphQLError::new(
            "Must provide operation name if query contains multiple operations.",
        ));
    };
    document
        .operations()
        .find(|op| op.name_str() == Some(name))
        .ok_or_else(|| GraphQLError::new(format!("Unknown operation named \"{name}\".")))
}
