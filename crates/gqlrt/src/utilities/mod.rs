//! Helpers over types and values shared by validation and execution.

mod ast_from_value;
mod coerce_value;
mod is_valid_literal_value;
mod suggestion_list;
mod type_comparators;
mod type_from_ast;
mod value_from_ast;

pub use ast_from_value::ast_from_value;
pub use coerce_value::coerce_value;
pub use is_valid_literal_value::is_valid_literal_value;
pub use suggestion_list::quoted_or_list;
pub use suggestion_list::suggestion_list;
pub use type_comparators::do_types_overlap;
pub use type_comparators::is_type_sub_type_of;
pub use type_from_ast::type_from_ast;
pub use value_from_ast::value_from_ast;
