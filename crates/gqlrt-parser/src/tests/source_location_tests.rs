//! Tests for [`crate::get_location`] and the error excerpt renderer.

use crate::Source;
use crate::SourceLocation;
use crate::get_location;
use crate::highlight_source_at_location;
use crate::lexer::Lexer;
use crate::token::TokenKind;
use proptest::prelude::*;
use std::sync::Arc;

#[test]
fn counts_each_line_terminator_once() {
    // a \n b \r \n c \r d
    let source = Source::new("a\nb\r\nc\rd");
    assert_eq!(get_location(&source, 0), SourceLocation::new(1, 1));
    assert_eq!(get_location(&source, 2), SourceLocation::new(2, 1));
    assert_eq!(get_location(&source, 5), SourceLocation::new(3, 1));
    assert_eq!(get_location(&source, 7), SourceLocation::new(4, 1));
}

#[test]
fn lf_of_crlf_stays_on_terminated_line() {
    let source = Source::new("a\nb\r\nc");
    assert_eq!(get_location(&source, 4), SourceLocation::new(2, 3));
}

#[test]
fn columns_count_characters() {
    let source = Source::new("\u{e9}\u{1F389} x");
    assert_eq!(get_location(&source, 7), SourceLocation::new(1, 4));
}

#[test]
fn clamps_past_end() {
    let source = Source::new("ab");
    assert_eq!(get_location(&source, 100), SourceLocation::new(1, 3));
}

#[test]
fn highlights_surrounding_lines() {
    let source = Source::new("first\nsecond\nthird\nfourth");
    assert_eq!(
        highlight_source_at_location(&source, SourceLocation::new(2, 3)),
        "1: first\n2: second\n     ^\n3: third\n",
    );
}

#[test]
fn highlight_pads_line_numbers() {
    let body = (1..=10).map(|n| format!("line{n}")).collect::<Vec<_>>().join("\n");
    let source = Source::new(body);
    assert_eq!(
        highlight_source_at_location(&source, SourceLocation::new(9, 1)),
        " 8: line8\n 9: line9\n    ^\n10: line10\n",
    );
}

const SEPARATORS: &[&str] = &[" ", "\t", ",", "\n", "\r", "\r\n", " # comment\n"];

proptest! {
    /// Every token's start offset maps to the line and column where it was
    /// placed, regardless of which line terminators separate tokens.
    #[test]
    fn token_locations_match_placement(
        pieces in prop::collection::vec(
            ("[a-z_][a-z0-9_]{0,6}", 0..SEPARATORS.len()),
            1..40,
        ),
    ) {
        let mut body = String::new();
        let mut expected = vec![];
        let mut line = 1;
        let mut column = 1;
        for (name, sep_idx) in &pieces {
            expected.push(SourceLocation::new(line, column));
            body.push_str(name);
            column += name.len();

            let separator = SEPARATORS[*sep_idx];
            body.push_str(separator);
            if separator.ends_with('\n') || separator == "\r" {
                line += 1;
                column = 1;
            } else {
                column += separator.len();
            }
        }

        let source = Arc::new(Source::new(body));
        let mut lexer = Lexer::new(&source);
        let mut actual = vec![];
        loop {
            let token = lexer.next_token().expect("lex error");
            if token.kind == TokenKind::Eof {
                break;
            }
            actual.push(get_location(&source, token.start));
        }
        prop_assert_eq!(actual, expected);
    }
}
