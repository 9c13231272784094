use crate::ast::Loc;

/// A GraphQL name (`[_A-Za-z][_A-Za-z0-9]*`) as it appeared in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Option<Loc>,
}

impl Name {
    /// Builds a location-less name, mostly useful for synthesized ASTs and
    /// tests.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
