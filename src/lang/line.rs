use super::ast::Statement;
use super::token::Token;
use super::{lex, parse, Error, LineNumber};

/// One line of source, as read, with its tokens.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    text: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(number: LineNumber, s: &str) -> Line {
        let text = s.trim_end_matches(['\n', '\r']);
        Line {
            number,
            text: text.to_string(),
            tokens: lex(text),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn statement(&self) -> Result<Statement, Error> {
        parse(&self.tokens).map_err(|e| e.in_line(self.number, &self.text))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
