//! Token types produced by the [lexer](crate::lexer) and consumed by the
//! [parser](crate::Parser).

mod lexed_token;
mod token_kind;

pub use lexed_token::Token;
pub use token_kind::TokenKind;
