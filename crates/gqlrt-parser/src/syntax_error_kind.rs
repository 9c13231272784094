/// Categorizes a [`SyntaxError`](crate::SyntaxError) for programmatic
/// handling, so callers need not pattern-match on message text.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A character that cannot begin any token.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A string literal reached a line terminator or the end of input before
    /// its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    #[error("invalid character escape sequence")]
    InvalidEscape,

    /// A malformed numeric literal (e.g. `1.`, `00`, `1e`, `12abc`).
    #[error("invalid number")]
    InvalidNumber,

    /// The parser required one token kind and found another.
    #[error("expected `{expected}`, found `{found}`")]
    ExpectedToken {
        expected: String,
        found: String,
    },

    /// The parser found a token that cannot start the construct it was
    /// parsing.
    #[error("unexpected `{found}`")]
    UnexpectedToken {
        found: String,
    },

    /// An object literal named the same field twice.
    #[error("duplicate object field `{name}`")]
    DuplicateObjectField {
        name: String,
    },

    /// A non-null type wrapped another non-null type (e.g. `Int!!`).
    #[error("nested non-null type")]
    NestedNonNull,

    /// Selection sets, list/object literals, or list types nested deeper than
    /// the parser's recursion limit.
    #[error("nesting too deep")]
    NestingTooDeep,
}
