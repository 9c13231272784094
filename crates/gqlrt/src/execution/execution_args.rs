use crate::Schema;
use crate::Value;
use crate::execution::FieldValue;
use crate::execution::Middleware;
use gqlrt_parser::ast;
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

/// The inputs of one execution.
///
/// ```rust
/// # use gqlrt::ExecutionArgs;
/// # fn demo(schema: &gqlrt::Schema, document: &gqlrt_parser::ast::Document) {
/// let args = ExecutionArgs::new(schema, document)
///     .operation_name("HeroQuery")
///     .variable("episode", "JEDI");
/// # }
/// ```
pub struct ExecutionArgs<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) document: &'a ast::Document,
    pub(crate) root_value: FieldValue,
    pub(crate) context: &'a dyn Any,
    pub(crate) variables: IndexMap<String, Value>,
    pub(crate) operation_name: Option<String>,
    pub(crate) middleware: Vec<Arc<dyn Middleware>>,
}

impl<'a> ExecutionArgs<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        Self {
            schema,
            document,
            root_value: FieldValue::null(),
            context: &(),
            variables: IndexMap::new(),
            operation_name: None,
            middleware: vec![],
        }
    }

    /// The source value handed to the root fields' resolvers.
    pub fn root_value(mut self, root_value: impl Into<FieldValue>) -> Self {
        self.root_value = root_value.into();
        self
    }

    /// A value resolvers can reach with
    /// [`ResolveInfo::context`](crate::execution::ResolveInfo::context).
    pub fn context(mut self, context: &'a dyn Any) -> Self {
        self.context = context;
        self
    }

    /// Replaces all variable inputs. A `serde_json::Map` works here.
    pub fn variables<K, V>(mut self, variables: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.variables = variables
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self
    }

    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }
}
