use gqlrt_parser::SourceLocation;
use gqlrt_parser::SyntaxError;
use gqlrt_parser::ast;
use serde::Serialize;
use std::sync::Arc;

/// One step in the response path of a field error: a response key or a list
/// index.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// An error reported in the `errors` list of a response.
///
/// Validation errors, variable-coercion errors and field errors all take this
/// shape. Serializes as `{"message", "locations"?, "path"?}`.
#[derive(Clone, Debug, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    #[serde(skip)]
    pub original_error: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
            original_error: None,
        }
    }

    /// Appends the start of `loc` (if the node was parsed with locations) to
    /// this error's locations.
    pub fn at(mut self, loc: Option<&ast::Loc>) -> Self {
        if let Some(loc) = loc {
            self.locations.push(loc.start_location());
        }
        self
    }

    pub fn at_all<'a>(self, locs: impl IntoIterator<Item = Option<&'a ast::Loc>>) -> Self {
        locs.into_iter().fold(self, GraphQLError::at)
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    pub fn path(&self) -> Option<&[PathSegment]> {
        self.path.as_deref()
    }
}

impl PartialEq for GraphQLError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.locations == other.locations
            && self.path == other.path
    }
}

impl From<SyntaxError> for GraphQLError {
    fn from(err: SyntaxError) -> Self {
        Self {
            message: err.format_message(),
            locations: vec![err.location()],
            path: None,
            original_error: Some(Arc::new(err)),
        }
    }
}

/// The error half of a resolver's result.
///
/// Anything implementing [`std::error::Error`] converts into a `FieldError`
/// with `?`, which keeps the source error as the reported error's
/// `original_error`.
#[derive(Clone, Debug)]
pub struct FieldError {
    message: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn into_graphql_error(
        self,
        locs: &[&ast::Field],
        path: Vec<PathSegment>,
    ) -> GraphQLError {
        let mut error = GraphQLError::new(self.message)
            .at_all(locs.iter().map(|field| field.loc.as_ref()))
            .with_path(path);
        error.original_error = self.source;
        error
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<E> for FieldError {
    fn from(err: E) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Arc::new(err)),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
