use std::sync::Arc;

/// The name given to a [`Source`] when the caller does not supply one.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL";

/// An immutable GraphQL source document: the UTF-8 body text plus a name used
/// when rendering diagnostics (typically a file path or request label).
///
/// AST nodes keep an [`Arc<Source>`] in their [`Loc`](crate::ast::Loc) so that
/// any node can be mapped back to a line and column long after parsing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, DEFAULT_SOURCE_NAME)
    }

    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    /// The full text of this source.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

/// Anything [`parse`](crate::parse) accepts as input.
///
/// Passing an existing `Arc<Source>` lets callers share one source between
/// the parsed document and their own diagnostics.
pub trait IntoSource {
    fn into_source(self) -> Arc<Source>;
}

impl IntoSource for Arc<Source> {
    fn into_source(self) -> Arc<Source> {
        self
    }
}

impl IntoSource for Source {
    fn into_source(self) -> Arc<Source> {
        Arc::new(self)
    }
}

impl IntoSource for &str {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}

impl IntoSource for String {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}
