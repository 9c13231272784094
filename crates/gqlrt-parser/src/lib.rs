//! Lexing, parsing, and printing of GraphQL documents.
//!
//! [`parse`] turns GraphQL source text into an [`ast::Document`] with precise
//! source locations, [`print`] turns a document back into canonical source
//! text, and [`visit`](visit::visit) walks a document depth-first.
//!
//! ```rust
//! use gqlrt_parser::ParseOptions;
//!
//! let doc = gqlrt_parser::parse("query Hero { hero { name } }", ParseOptions::default())?;
//! assert_eq!(gqlrt_parser::print(&doc), "query Hero {\n  hero {\n    name\n  }\n}\n");
//! # Ok::<(), gqlrt_parser::SyntaxError>(())
//! ```

pub mod ast;
pub mod lexer;
mod parser;
mod printer;
mod source;
mod source_location;
mod syntax_error;
mod syntax_error_kind;
pub mod token;
pub mod visit;

pub use lexer::read_token;
pub use parser::ParseOptions;
pub use parser::Parser;
pub use parser::parse;
pub use parser::parse_type;
pub use parser::parse_value;
pub use printer::print;
pub use printer::print_definition;
pub use printer::print_selection_set;
pub use printer::print_type;
pub use printer::print_value;
pub use source::DEFAULT_SOURCE_NAME;
pub use source::IntoSource;
pub use source::Source;
pub use source_location::SourceLocation;
pub use source_location::get_location;
pub use syntax_error::SyntaxError;
pub use syntax_error::highlight_source_at_location;
pub use syntax_error_kind::SyntaxErrorKind;

#[cfg(test)]
mod tests;
