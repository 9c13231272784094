use crate::GraphQLError;
use crate::Value;
use serde::Serialize;

/// The response of an execution.
///
/// `data` is `None` when execution never started (no usable operation,
/// invalid variables, or a document rejected by validation); `invalid` is
/// set in those cases. A root-level null propagation yields
/// `Some(Value::Null)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,

    #[serde(skip)]
    pub invalid: bool,
}

impl ExecutionResult {
    pub fn from_data(data: Value, errors: Vec<GraphQLError>) -> Self {
        Self {
            data: Some(data),
            errors,
            invalid: false,
        }
    }

    /// A result with no data, marking a request that could not be
    /// executed.
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: None,
            errors,
            invalid: true,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl std::fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
