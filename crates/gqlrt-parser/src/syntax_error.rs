use crate::Source;
use crate::SourceLocation;
use crate::SyntaxErrorKind;
use crate::get_location;
use std::sync::Arc;

/// A lexing or parsing failure.
///
/// The [`Display`](std::fmt::Display) form is the full diagnostic:
///
/// ```text
/// Syntax Error GraphQL (1:3) Expected Name, found EOF
///
/// 1: { 
///      ^
/// ```
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_message())]
pub struct SyntaxError {
    graphql_source: Arc<Source>,
    position: usize,
    location: SourceLocation,
    description: String,
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(
        graphql_source: Arc<Source>,
        position: usize,
        description: impl Into<String>,
        kind: SyntaxErrorKind,
    ) -> Self {
        let location = get_location(&graphql_source, position);
        Self {
            graphql_source,
            position,
            location,
            description: description.into(),
            kind,
        }
    }

    /// The [`Source`] the error was found in.
    pub fn graphql_source(&self) -> &Arc<Source> {
        &self.graphql_source
    }

    /// Byte offset into the source body where the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// The bare description, e.g. `Unterminated string.`, without the
    /// `Syntax Error` prefix or source excerpt.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// `Syntax Error {name} ({line}:{column}) {description}` followed by a
    /// blank line and a source excerpt with a caret under the error column.
    pub fn format_message(&self) -> String {
        format!(
            "Syntax Error {} ({}:{}) {}\n\n{}",
            self.graphql_source.name(),
            self.location.line,
            self.location.column,
            self.description,
            highlight_source_at_location(&self.graphql_source, self.location),
        )
    }
}

/// Renders up to three numbered lines around `location` (the previous line,
/// the line itself, and the next line) with a caret line under the column.
///
/// Line numbers are right-aligned to the width of the largest number shown.
pub fn highlight_source_at_location(source: &Source, location: SourceLocation) -> String {
    let lines = split_lines(source.body());
    let line = location.line;
    let pad_len = (line + 1).to_string().len();
    let mut result = String::new();

    let numbered = |num: usize, text: &str| format!("{num:>pad_len$}: {text}\n");
    if line >= 2
        && let Some(prev) = lines.get(line - 2)
    {
        result.push_str(&numbered(line - 1, prev));
    }
    if let Some(current) = lines.get(line - 1) {
        result.push_str(&numbered(line, current));
        result.push_str(&" ".repeat(1 + pad_len + location.column));
        result.push_str("^\n");
    }
    if let Some(next) = lines.get(line) {
        result.push_str(&numbered(line + 1, next));
    }
    result
}

/// Splits on LF, CR, and CR LF the same way [`get_location`] counts lines.
fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = vec![];
    let bytes = body.as_bytes();
    let mut line_start = 0;
    let mut idx = 0;
    while let Some(rel) = memchr::memchr2(b'\n', b'\r', &bytes[idx..]) {
        let at = idx + rel;
        lines.push(&body[line_start..at]);
        idx = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
            at + 2
        } else {
            at + 1
        };
        line_start = idx;
    }
    lines.push(&body[line_start..]);
    lines
}
