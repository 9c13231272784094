use crate::token::TokenKind;
use std::borrow::Cow;

/// A single lexical token: its kind, the half-open byte range it occupies in
/// the source body, and (for names, numbers, and strings) its value.
///
/// Names and numbers always borrow from the source text. String values only
/// allocate when the literal contains escape sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: Option<Cow<'src, str>>,
}

impl<'src> Token<'src> {
    pub(crate) fn punctuator(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            value: None,
        }
    }

    pub(crate) fn with_value(
        kind: TokenKind,
        start: usize,
        end: usize,
        value: Cow<'src, str>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            value: Some(value),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Describes this token the way syntax errors mention it: the kind, plus
    /// the quoted value for value-carrying tokens (e.g. `Name "foo"`).
    pub fn describe(&self) -> String {
        match &self.value {
            Some(value) => format!("{} \"{value}\"", self.kind.description()),
            None => self.kind.description().to_string(),
        }
    }
}
