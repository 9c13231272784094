use crate::Value;
use gqlrt_parser::ast;
use std::sync::Arc;

pub type SerializeFn = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;
pub type ParseValueFn = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;
pub type ParseLiteralFn = Arc<dyn Fn(&ast::Value) -> Option<Value> + Send + Sync>;

/// A leaf type with three coercion functions:
///
/// * `serialize` turns a resolved (internal) value into its response form.
///   An `Err` becomes a field error; `Ok(Value::Null)` is a null result.
/// * `parse_value` turns a variable's input value into an internal value,
///   or `None` if the input is invalid.
/// * `parse_literal` does the same for a literal in the document.
#[derive(Clone)]
pub struct ScalarType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) serialize: SerializeFn,
    pub(crate) parse_value: ParseValueFn,
    pub(crate) parse_literal: ParseLiteralFn,
}

impl ScalarType {
    pub fn builder(name: impl Into<String>) -> ScalarTypeBuilder {
        ScalarTypeBuilder {
            name: name.into(),
            description: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn serialize(&self, value: &Value) -> Result<Value, String> {
        (self.serialize)(value)
    }

    pub fn parse_value(&self, value: &Value) -> Option<Value> {
        (self.parse_value)(value)
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<Value> {
        (self.parse_literal)(value)
    }
}

impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Builds a custom [`ScalarType`].
///
/// Omitted functions default to identity `serialize` and `parse_value`, and to
/// a `parse_literal` that accepts any constant literal as its plain value.
pub struct ScalarTypeBuilder {
    name: String,
    description: Option<String>,
    serialize: Option<SerializeFn>,
    parse_value: Option<ParseValueFn>,
    parse_literal: Option<ParseLiteralFn>,
}

impl ScalarTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn serialize(
        mut self,
        f: impl Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Some(Arc::new(f));
        self
    }

    pub fn parse_value(
        mut self,
        f: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_value = Some(Arc::new(f));
        self
    }

    pub fn parse_literal(
        mut self,
        f: impl Fn(&ast::Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.parse_literal = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> ScalarType {
        ScalarType {
            name: self.name,
            description: self.description,
            serialize: self.serialize.unwrap_or_else(|| Arc::new(|v| Ok(v.clone()))),
            parse_value: self.parse_value.unwrap_or_else(|| Arc::new(|v| Some(v.clone()))),
            parse_literal: self.parse_literal.unwrap_or_else(|| Arc::new(const_literal_value)),
        }
    }
}

/// The plain runtime value of a constant literal. Variables yield `None`.
pub(crate) fn const_literal_value(literal: &ast::Value) -> Option<Value> {
    Some(match literal {
        ast::Value::Variable(_) => return None,
        ast::Value::Int(int) => Value::Int(int.value.parse().ok()?),
        ast::Value::Float(float) => Value::Float(float.value.parse().ok()?),
        ast::Value::String(string) => Value::String(string.value.clone()),
        ast::Value::Boolean(boolean) => Value::Boolean(boolean.value),
        ast::Value::Null(_) => Value::Null,
        ast::Value::Enum(enum_value) => Value::Enum(enum_value.value.clone()),
        ast::Value::List(list) => Value::List(
            list.values.iter().map(const_literal_value).collect::<Option<_>>()?,
        ),
        ast::Value::Object(obj) => Value::Object(
            obj.fields
                .iter()
                .map(|field| Some((field.name.value.clone(), const_literal_value(&field.value)?)))
                .collect::<Option<_>>()?,
        ),
    })
}
