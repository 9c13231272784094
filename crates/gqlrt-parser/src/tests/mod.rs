mod ast_utils;
mod lexer_tests;
mod printer_tests;
mod source_location_tests;
mod visit_tests;
