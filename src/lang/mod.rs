/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Pine source lines.
A line is classified on its own; nothing here knows about labels or any
other line.

*/

pub type LineNumber = usize;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::literal;
pub use parse::parse;

#[cfg(test)]
mod tests;
