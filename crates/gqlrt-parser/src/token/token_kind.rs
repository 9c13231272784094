/// The kind of a lexical [`Token`](crate::token::Token).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    /// Start of file. Only ever the parser's initial "previous" token.
    Sof,
    /// End of file.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `|`
    Pipe,
    /// `}`
    BraceR,

    // =========================================================================
    // Tokens carrying a value
    // =========================================================================
    Name,
    Int,
    Float,
    String,
}

impl TokenKind {
    /// The human-readable description used in syntax error messages.
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Sof => "<SOF>",
            TokenKind::Eof => "EOF",
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::ParenL => "(",
            TokenKind::ParenR => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketL => "[",
            TokenKind::BracketR => "]",
            TokenKind::BraceL => "{",
            TokenKind::Pipe => "|",
            TokenKind::BraceR => "}",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
        }
    }

    pub fn is_punctuator(&self) -> bool {
        !matches!(
            self,
            TokenKind::Sof
                | TokenKind::Eof
                | TokenKind::Name
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::String,
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
