//! Tests for [`crate::lexer`].

use crate::Source;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::lexer::Lexer;
use crate::read_token;
use crate::token::TokenKind;
use std::sync::Arc;

fn source(body: &str) -> Arc<Source> {
    Arc::new(Source::new(body))
}

/// Lexes the first token of `body` and returns `(kind, start, end, value)`.
fn lex_one(body: &str) -> (TokenKind, usize, usize, Option<String>) {
    let src = source(body);
    let token = read_token(&src, 0).expect("lex error");
    (token.kind, token.start, token.end, token.value().map(str::to_string))
}

fn lex_err(body: &str) -> SyntaxError {
    let src = source(body);
    match read_token(&src, 0) {
        Ok(token) => panic!("Expected a lex error, got: {token:?}"),
        Err(err) => err,
    }
}

// =============================================================================
// Ignored characters
// =============================================================================

#[test]
fn skips_whitespace_and_comments() {
    assert_eq!(
        lex_one("\n\r\n\t #comment\r\n  foo#\n"),
        (TokenKind::Name, 17, 20, Some("foo".to_string())),
    );
}

#[test]
fn skips_commas_and_bom() {
    assert_eq!(
        lex_one("\u{FEFF} ,,foo"),
        (TokenKind::Name, 6, 9, Some("foo".to_string())),
    );
}

#[test]
fn empty_input_is_eof() {
    assert_eq!(lex_one(""), (TokenKind::Eof, 0, 0, None));
    assert_eq!(lex_one("  # only a comment"), (TokenKind::Eof, 18, 18, None));
}

#[test]
fn comment_ends_at_carriage_return() {
    assert_eq!(
        lex_one("# comment\rname"),
        (TokenKind::Name, 10, 14, Some("name".to_string())),
    );
}

// =============================================================================
// Punctuators and names
// =============================================================================

#[test]
fn lexes_all_punctuators() {
    let src = source("! $ ( ) ... : = @ [ ] { | }");
    let mut lexer = Lexer::new(&src);
    let mut kinds = vec![];
    loop {
        let token = lexer.next_token().expect("lex error");
        if token.kind == TokenKind::Eof {
            break;
        }
        kinds.push(token.kind);
    }
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Dollar,
            TokenKind::ParenL,
            TokenKind::ParenR,
            TokenKind::Spread,
            TokenKind::Colon,
            TokenKind::Equals,
            TokenKind::At,
            TokenKind::BracketL,
            TokenKind::BracketR,
            TokenKind::BraceL,
            TokenKind::Pipe,
            TokenKind::BraceR,
        ],
    );
}

#[test]
fn spread_spans_three_bytes() {
    assert_eq!(lex_one("..."), (TokenKind::Spread, 0, 3, None));
}

#[test]
fn two_dots_are_unexpected() {
    let err = lex_err("..");
    assert_eq!(err.description(), "Unexpected character \".\".");
    assert_eq!(err.kind(), &SyntaxErrorKind::UnexpectedCharacter);
}

#[test]
fn names_allow_underscores_and_digits() {
    assert_eq!(
        lex_one("_under_score9 rest"),
        (TokenKind::Name, 0, 13, Some("_under_score9".to_string())),
    );
}

#[test]
fn unexpected_characters() {
    assert_eq!(lex_err("?").description(), "Unexpected character \"?\".");
    assert_eq!(lex_err("\u{203B}").description(), "Unexpected character \"\u{203B}\".");
    assert_eq!(lex_err("\u{0007}").description(), "Unexpected character \"\\u0007\".");
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn lexes_simple_string() {
    assert_eq!(
        lex_one("\"simple\""),
        (TokenKind::String, 0, 8, Some("simple".to_string())),
    );
    assert_eq!(
        lex_one("\" white space \""),
        (TokenKind::String, 0, 15, Some(" white space ".to_string())),
    );
}

#[test]
fn decodes_escapes() {
    let (_, _, _, value) = lex_one(r#""quote \" slash \/ back \\""#);
    assert_eq!(value.as_deref(), Some("quote \" slash / back \\"));

    let (_, _, _, value) = lex_one(r#""escaped \n\r\b\t\f""#);
    assert_eq!(value.as_deref(), Some("escaped \n\r\u{8}\t\u{c}"));

    let (_, _, _, value) = lex_one(r#""unicode \u1234\u5678\u90AB\uCDEF""#);
    assert_eq!(value.as_deref(), Some("unicode \u{1234}\u{5678}\u{90AB}\u{CDEF}"));
}

#[test]
fn keeps_non_ascii_characters() {
    let (kind, start, end, value) = lex_one("\"caf\u{e9} \u{1F389}\"");
    assert_eq!(kind, TokenKind::String);
    assert_eq!((start, end), (0, 12));
    assert_eq!(value.as_deref(), Some("caf\u{e9} \u{1F389}"));
}

#[test]
fn unterminated_strings() {
    let err = lex_err("\"");
    assert_eq!(err.description(), "Unterminated string.");
    assert_eq!(err.kind(), &SyntaxErrorKind::UnterminatedString);
    assert_eq!(err.position(), 1);
    assert_eq!(
        err.to_string(),
        "Syntax Error GraphQL (1:2) Unterminated string.\n\n1: \"\n    ^\n",
    );

    assert_eq!(lex_err("\"no end quote").position(), 13);
    assert_eq!(lex_err("\"multi\nline\"").description(), "Unterminated string.");
    assert_eq!(lex_err("\"multi\rline\"").description(), "Unterminated string.");
}

#[test]
fn control_characters_in_strings() {
    assert_eq!(
        lex_err("\"contains unescaped \u{0007} control char\"").description(),
        "Invalid character within String: \"\\u0007\".",
    );
}

#[test]
fn invalid_escapes() {
    let err = lex_err(r#""bad \z esc""#);
    assert_eq!(err.description(), "Invalid character escape sequence: \\z.");
    assert_eq!(err.kind(), &SyntaxErrorKind::InvalidEscape);
    assert_eq!(err.position(), 5);

    assert_eq!(
        lex_err(r#""bad \x esc""#).description(),
        "Invalid character escape sequence: \\x.",
    );
    assert_eq!(
        lex_err(r#""bad \u1 esc""#).description(),
        "Invalid character escape sequence: \\u1 es.",
    );
    assert_eq!(
        lex_err(r#""bad \uXXXX esc""#).description(),
        "Invalid character escape sequence: \\uXXXX.",
    );
    assert_eq!(
        lex_err(r#""bad \uD800 surrogate""#).description(),
        "Invalid character escape sequence: \\uD800.",
    );
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn lexes_ints() {
    for body in ["4", "-4", "0", "-0", "9", "1234567890"] {
        assert_eq!(
            lex_one(body),
            (TokenKind::Int, 0, body.len(), Some(body.to_string())),
            "lexing {body:?}",
        );
    }
}

#[test]
fn lexes_floats() {
    for body in ["4.123", "-4.123", "0.123", "123e4", "123E4", "123e-4", "123e+4", "-1.123e4",
                 "-1.123E-4", "-1.123e+4567"] {
        assert_eq!(
            lex_one(body),
            (TokenKind::Float, 0, body.len(), Some(body.to_string())),
            "lexing {body:?}",
        );
    }
}

#[test]
fn invalid_numbers() {
    let cases = [
        ("00", 1, "Invalid number, unexpected digit after 0: \"0\"."),
        ("01", 1, "Invalid number, unexpected digit after 0: \"1\"."),
        ("1.", 2, "Invalid number, expected digit but got: <EOF>."),
        ("1.A", 2, "Invalid number, expected digit but got: \"A\"."),
        ("-A", 1, "Invalid number, expected digit but got: \"A\"."),
        ("1.0e", 4, "Invalid number, expected digit but got: <EOF>."),
        ("1.0eA", 4, "Invalid number, expected digit but got: \"A\"."),
        ("12abc", 2, "Invalid number, expected digit but got: \"a\"."),
        ("0xF", 1, "Invalid number, expected digit but got: \"x\"."),
        ("1.2.3", 3, "Invalid number, expected digit but got: \".\"."),
    ];
    for (body, position, description) in cases {
        let err = lex_err(body);
        assert_eq!(err.description(), description, "lexing {body:?}");
        assert_eq!(err.position(), position, "lexing {body:?}");
        assert_eq!(err.kind(), &SyntaxErrorKind::InvalidNumber);
    }
}

#[test]
fn leading_plus_and_dot_are_unexpected() {
    assert_eq!(lex_err("+1").description(), "Unexpected character \"+\".");
    assert_eq!(lex_err(".123").description(), "Unexpected character \".\".");
}

#[test]
fn read_token_starts_from_offset() {
    let src = source("a b  c");
    let token = read_token(&src, 1).expect("lex error");
    assert_eq!((token.start, token.end, token.value()), (2, 3, Some("b")));
    let token = read_token(&src, 3).expect("lex error");
    assert_eq!((token.start, token.end, token.value()), (5, 6, Some("c")));
    let token = read_token(&src, 6).expect("lex error");
    assert_eq!(token.kind, TokenKind::Eof);
}
