use crate::Source;
use crate::SourceLocation;
use crate::get_location;
use std::sync::Arc;

/// The half-open byte range `[start, end)` an AST node spans within its
/// [`Source`].
#[derive(Clone, PartialEq)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
    pub source: Arc<Source>,
}

impl Loc {
    /// The 1-based line and column of [`start`](Loc::start).
    pub fn start_location(&self) -> SourceLocation {
        get_location(&self.source, self.start)
    }

    /// The source text this node was parsed from.
    pub fn text(&self) -> &str {
        self.source.body().get(self.start..self.end).unwrap_or_default()
    }
}

// The source body is omitted so that debug output of large documents stays
// readable.
impl std::fmt::Debug for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loc({}..{})", self.start, self.end)
    }
}
