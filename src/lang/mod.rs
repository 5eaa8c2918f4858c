/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the counter
machine language, one line at a time.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod ident;
mod instruction;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::{is_label, is_macro_name, is_variable};
pub use instruction::{Instruction, Kind};
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use token::{Operator, Token, Word};
