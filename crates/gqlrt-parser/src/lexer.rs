//! Turns a [`Source`] body into [`Token`]s, one at a time.
//!
//! The lexer is pull-based: the [parser](crate::Parser) asks for the next
//! token past the end of the previous one. Whitespace, commas, the byte order
//! mark, and `#` line comments are skipped between tokens. Token offsets are
//! byte offsets into the source body.

use crate::Source;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::token::Token;
use crate::token::TokenKind;
use std::borrow::Cow;
use std::sync::Arc;

const BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Reads the first token that starts at or after `from_offset`, or an
/// [`Eof`](TokenKind::Eof) token if only ignored characters remain.
pub fn read_token(source: &Arc<Source>, from_offset: usize) -> Result<Token<'_>, SyntaxError> {
    Lexer::at(source, from_offset).next_token()
}

/// A cursor over a [`Source`] body that yields one [`Token`] per call to
/// [`next_token`](Lexer::next_token).
pub struct Lexer<'src> {
    source: &'src Arc<Source>,
    body: &'src str,

    /// Byte offset at which the next call starts scanning.
    curr_byte_offset: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src Arc<Source>) -> Self {
        Self::at(source, 0)
    }

    pub fn at(source: &'src Arc<Source>, offset: usize) -> Self {
        Self {
            source,
            body: source.body(),
            curr_byte_offset: offset.min(source.body().len()),
        }
    }

    pub fn source(&self) -> &'src Arc<Source> {
        self.source
    }

    pub fn next_token(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.skip_ignored(self.curr_byte_offset);
        let token = self.lex_token_at(start)?;
        self.curr_byte_offset = token.end;
        Ok(token)
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.body.as_bytes().get(offset).copied()
    }

    fn error(
        &self,
        position: usize,
        description: impl Into<String>,
        kind: SyntaxErrorKind,
    ) -> SyntaxError {
        SyntaxError::new(self.source.clone(), position, description, kind)
    }

    /// Returns the offset of the first byte at or after `offset` that is not
    /// whitespace, a comma, a BOM, or part of a comment.
    fn skip_ignored(&self, mut offset: usize) -> usize {
        let bytes = self.body.as_bytes();
        while offset < bytes.len() {
            match bytes[offset] {
                b' ' | b'\t' | b',' | b'\n' | b'\r' => offset += 1,
                b'#' => {
                    offset = match memchr::memchr2(b'\n', b'\r', &bytes[offset..]) {
                        Some(rel) => offset + rel,
                        None => bytes.len(),
                    };
                },
                _ if bytes[offset..].starts_with(BOM) => offset += BOM.len(),
                _ => break,
            }
        }
        offset
    }

    fn lex_token_at(&self, start: usize) -> Result<Token<'src>, SyntaxError> {
        let Some(byte) = self.byte_at(start) else {
            return Ok(Token::punctuator(TokenKind::Eof, start, start));
        };

        let punctuator = |kind| -> Result<Token<'src>, SyntaxError> {
            Ok(Token::punctuator(kind, start, start + 1))
        };
        match byte {
            b'!' => punctuator(TokenKind::Bang),
            b'$' => punctuator(TokenKind::Dollar),
            b'(' => punctuator(TokenKind::ParenL),
            b')' => punctuator(TokenKind::ParenR),
            b':' => punctuator(TokenKind::Colon),
            b'=' => punctuator(TokenKind::Equals),
            b'@' => punctuator(TokenKind::At),
            b'[' => punctuator(TokenKind::BracketL),
            b']' => punctuator(TokenKind::BracketR),
            b'{' => punctuator(TokenKind::BraceL),
            b'|' => punctuator(TokenKind::Pipe),
            b'}' => punctuator(TokenKind::BraceR),
            b'.' => {
                if self.byte_at(start + 1) == Some(b'.') && self.byte_at(start + 2) == Some(b'.') {
                    Ok(Token::punctuator(TokenKind::Spread, start, start + 3))
                } else {
                    Err(self.unexpected_character(start))
                }
            },
            b'"' => self.lex_string(start),
            b'-' | b'0'..=b'9' => self.lex_number(start),
            b if is_name_start(b) => Ok(self.lex_name(start)),
            _ => Err(self.unexpected_character(start)),
        }
    }

    fn unexpected_character(&self, position: usize) -> SyntaxError {
        self.error(
            position,
            format!("Unexpected character {}.", self.describe_char_at(position)),
            SyntaxErrorKind::UnexpectedCharacter,
        )
    }

    /// Quotes the character at `offset` for an error message, escaping
    /// control characters as `\uXXXX`. Returns `<EOF>` past the end.
    fn describe_char_at(&self, offset: usize) -> String {
        match self.body.get(offset..).and_then(|rest| rest.chars().next()) {
            None => "<EOF>".to_string(),
            Some(ch) if ch.is_control() => format!("\"\\u{:04X}\"", ch as u32),
            Some(ch) => format!("\"{ch}\""),
        }
    }

    // =========================================================================
    // Names
    // =========================================================================

    fn lex_name(&self, start: usize) -> Token<'src> {
        let end = self.body.as_bytes()[start + 1..]
            .iter()
            .position(|b| !is_name_continue(*b))
            .map(|rel| start + 1 + rel)
            .unwrap_or(self.body.len());
        Token::with_value(TokenKind::Name, start, end, Cow::Borrowed(&self.body[start..end]))
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    fn lex_number(&self, start: usize) -> Result<Token<'src>, SyntaxError> {
        let mut pos = start;
        let mut is_float = false;

        if self.byte_at(pos) == Some(b'-') {
            pos += 1;
        }

        if self.byte_at(pos) == Some(b'0') {
            pos += 1;
            if let Some(b) = self.byte_at(pos)
                && b.is_ascii_digit()
            {
                return Err(self.error(
                    pos,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        self.describe_char_at(pos),
                    ),
                    SyntaxErrorKind::InvalidNumber,
                ));
            }
        } else {
            pos = self.lex_digits(pos)?;
        }

        if self.byte_at(pos) == Some(b'.') {
            is_float = true;
            pos = self.lex_digits(pos + 1)?;
        }

        if let Some(b'e' | b'E') = self.byte_at(pos) {
            is_float = true;
            pos += 1;
            if let Some(b'+' | b'-') = self.byte_at(pos) {
                pos += 1;
            }
            pos = self.lex_digits(pos)?;
        }

        // Numbers may not run directly into a `.` or a name (e.g. `1.2.3`,
        // `0xF`, `12abc`).
        if let Some(b) = self.byte_at(pos)
            && (b == b'.' || is_name_start(b))
        {
            return Err(self.expected_digit(pos));
        }

        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        Ok(Token::with_value(kind, start, pos, Cow::Borrowed(&self.body[start..pos])))
    }

    /// Consumes one or more ASCII digits starting at `start` and returns the
    /// offset just past them.
    fn lex_digits(&self, start: usize) -> Result<usize, SyntaxError> {
        let bytes = self.body.as_bytes();
        let digit_count = bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digit_count == 0 {
            return Err(self.expected_digit(start));
        }
        Ok(start + digit_count)
    }

    fn expected_digit(&self, position: usize) -> SyntaxError {
        self.error(
            position,
            format!(
                "Invalid number, expected digit but got: {}.",
                self.describe_char_at(position),
            ),
            SyntaxErrorKind::InvalidNumber,
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&self, start: usize) -> Result<Token<'src>, SyntaxError> {
        let bytes = self.body.as_bytes();
        let mut pos = start + 1;
        let mut chunk_start = pos;
        let mut cooked: Option<String> = None;

        loop {
            match bytes.get(pos).copied() {
                None | Some(b'\n' | b'\r') => {
                    return Err(self.error(
                        pos,
                        "Unterminated string.",
                        SyntaxErrorKind::UnterminatedString,
                    ));
                },

                Some(b'"') => {
                    let raw = &self.body[chunk_start..pos];
                    let value = match cooked {
                        Some(mut cooked) => {
                            cooked.push_str(raw);
                            Cow::Owned(cooked)
                        },
                        None => Cow::Borrowed(raw),
                    };
                    return Ok(Token::with_value(TokenKind::String, start, pos + 1, value));
                },

                Some(b'\\') => {
                    let buf = cooked.get_or_insert_with(String::new);
                    buf.push_str(&self.body[chunk_start..pos]);
                    let escape_len = match bytes.get(pos + 1).copied() {
                        Some(b'"') => { buf.push('"'); 2 },
                        Some(b'\\') => { buf.push('\\'); 2 },
                        Some(b'/') => { buf.push('/'); 2 },
                        Some(b'b') => { buf.push('\u{0008}'); 2 },
                        Some(b'f') => { buf.push('\u{000C}'); 2 },
                        Some(b'n') => { buf.push('\n'); 2 },
                        Some(b'r') => { buf.push('\r'); 2 },
                        Some(b't') => { buf.push('\t'); 2 },
                        Some(b'u') => {
                            buf.push(self.lex_unicode_escape(pos)?);
                            6
                        },
                        _ => {
                            let escaped = self.body[pos + 1..]
                                .chars()
                                .next()
                                .map(String::from)
                                .unwrap_or_default();
                            return Err(self.error(
                                pos,
                                format!("Invalid character escape sequence: \\{escaped}."),
                                SyntaxErrorKind::InvalidEscape,
                            ));
                        },
                    };
                    pos += escape_len;
                    chunk_start = pos;
                },

                Some(b) if b < 0x20 && b != b'\t' => {
                    return Err(self.error(
                        pos,
                        format!(
                            "Invalid character within String: {}.",
                            self.describe_char_at(pos),
                        ),
                        SyntaxErrorKind::UnexpectedCharacter,
                    ));
                },

                // UTF-8 continuation bytes never collide with the ASCII bytes
                // matched above, so multi-byte characters pass through here.
                Some(_) => pos += 1,
            }
        }
    }

    /// Decodes the `\uXXXX` escape whose backslash is at `backslash_pos`.
    fn lex_unicode_escape(&self, backslash_pos: usize) -> Result<char, SyntaxError> {
        let hex: String = self.body[backslash_pos + 2..].chars().take(4).collect();
        let decoded = if hex.len() == 4 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
        } else {
            None
        };
        decoded.ok_or_else(|| {
            self.error(
                backslash_pos,
                format!("Invalid character escape sequence: \\u{hex}."),
                SyntaxErrorKind::InvalidEscape,
            )
        })
    }
}

fn is_name_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

fn is_name_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}
