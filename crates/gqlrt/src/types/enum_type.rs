use crate::Value;
use gqlrt_parser::ast;
use indexmap::IndexMap;

/// One value of an [`EnumType`]: its internal runtime value plus
/// deprecation metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) value: Value,
    pub(crate) description: Option<String>,
    pub(crate) deprecation_reason: Option<String>,
}

impl EnumValue {
    /// An enum value whose internal value is `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            description: None,
            deprecation_reason: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

/// A leaf type with a closed set of named values.
///
/// Serializing maps an internal value back to its name; parsing maps a name
/// (as an enum literal, or a string input) to its internal value.
#[derive(Clone, Debug)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) values: IndexMap<String, EnumValue>,
    pub(crate) duplicate_values: Vec<String>,
}

impl EnumType {
    pub fn builder(name: impl Into<String>) -> EnumTypeBuilder {
        EnumTypeBuilder {
            ty: EnumType {
                name: name.into(),
                description: None,
                values: IndexMap::new(),
                duplicate_values: vec![],
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    /// The name of the first value whose internal value equals `value`.
    /// An [`Value::Enum`] naming one of this type's values also serializes
    /// to that name.
    pub fn serialize(&self, value: &Value) -> Option<Value> {
        self.values
            .iter()
            .find(|(_, enum_value)| enum_value.value == *value)
            .map(|(name, _)| Value::Enum(name.clone()))
            .or_else(|| match value {
                Value::Enum(name) if self.values.contains_key(name) => {
                    Some(Value::Enum(name.clone()))
                },
                _ => None,
            })
    }

    pub fn parse_value(&self, value: &Value) -> Option<Value> {
        match value {
            Value::String(name) | Value::Enum(name) => {
                self.values.get(name).map(|enum_value| enum_value.value.clone())
            },
            _ => None,
        }
    }

    pub fn parse_literal(&self, literal: &ast::Value) -> Option<Value> {
        match literal {
            ast::Value::Enum(enum_value) => {
                self.values.get(&enum_value.value).map(|v| v.value.clone())
            },
            _ => None,
        }
    }
}

pub struct EnumTypeBuilder {
    ty: EnumType,
}

impl EnumTypeBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.ty.description = Some(description.into());
        self
    }

    pub fn value(mut self, name: impl Into<String>, value: EnumValue) -> Self {
        let name = name.into();
        if self.ty.values.contains_key(&name) {
            self.ty.duplicate_values.push(name);
        } else {
            self.ty.values.insert(name, value);
        }
        self
    }

    /// Adds a value whose internal value is its own name, as a string.
    pub fn simple_value(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let value = EnumValue::new(Value::String(name.clone()));
        self.value(name, value)
    }

    pub fn build(self) -> EnumType {
        self.ty
    }
}
