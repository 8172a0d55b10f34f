use super::ast::*;
use super::token::{Opcode, Token};
use super::*;

mod lex_test;
mod parse_test;
