use crate::Source;

/// A 1-based line and column within a [`Source`] body.
///
/// Columns count characters (not bytes) from the start of the line, so a
/// multi-byte character advances the column by one.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Converts a byte offset within `source` into a [`SourceLocation`].
///
/// Line terminators are LF, CR, or the pair CR LF (counted once). An offset
/// past the end of the body is clamped to the end.
pub fn get_location(source: &Source, position: usize) -> SourceLocation {
    let body = source.body();
    let position = position.min(body.len());
    let bytes = body.as_bytes();

    let mut line = 1;
    let mut line_start = 0;
    let mut idx = 0;
    while let Some(rel) = memchr::memchr2(b'\n', b'\r', &bytes[idx..position]) {
        let at = idx + rel;
        let next = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
            at + 2
        } else {
            at + 1
        };
        if next > position {
            // `position` points at the LF of a CR LF pair; it still belongs to
            // the line the CR terminates.
            break;
        }
        line += 1;
        line_start = next;
        idx = next;
    }

    let column = 1 + body[line_start..]
        .char_indices()
        .take_while(|(offset, _)| line_start + offset < position)
        .count();

    SourceLocation { line, column }
}
