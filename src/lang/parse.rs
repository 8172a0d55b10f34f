use super::token::{self, Opcode, Token};
use super::{ast::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token]) -> Result<Statement> {
    Parser::parse(tokens)
}

/// Infer the kind of a literal from its syntax.
/// Quoted is text, a trailing `f` is real, bare digits are integer.
pub fn literal(s: &str) -> Result<Literal> {
    let s = s.trim();
    let mut chars = s.chars();
    if let (Some(first), Some(last)) = (chars.next(), chars.next_back()) {
        if (first == '\'' || first == '"') && first == last {
            return Ok(Literal::Text(s[1..s.len() - 1].to_string()));
        }
    }
    match token::Literal::classify(s) {
        Some(token::Literal::Integer(n)) => match n.parse::<i64>() {
            Ok(n) => Ok(Literal::Integer(n)),
            Err(_) => Err(error!(Overflow; "INTEGER LITERAL OUT OF RANGE")),
        },
        Some(token::Literal::Real(r)) => match r.trim_end_matches('f').parse::<f64>() {
            Ok(n) => Ok(Literal::Real(n)),
            Err(_) => Err(error!(Malformed; "INVALID REAL LITERAL")),
        },
        _ => Err(error!(Malformed; "INVALID LITERAL")),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            col: 0..0,
        };
        let statement = match parse.next() {
            None => return Ok(Statement::Blank),
            Some(Token::Remark(_)) => return Ok(Statement::Remark(parse.column())),
            Some(Token::Word(word)) => match Opcode::from_mnemonic(word) {
                Some(opcode) => Statement::for_opcode(&mut parse, opcode),
                None => Err(error!(Malformed)),
            },
            Some(_) => Err(error!(Malformed)),
        };
        match statement {
            Ok(s) => match parse.next() {
                None => Ok(s),
                Some(_) => Err(error!(Malformed, ..&parse.col; "INVALID/MISSING ARGUMENTS")),
            },
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.len();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Word(s)) => Ok(Ident::new(self.column(), s)),
            Some(_) => Err(error!(Malformed; "EXPECTED NAME")),
            None => Err(error!(Malformed; "INVALID/MISSING ARGUMENTS")),
        }
    }

    fn word(&mut self) -> Result<(Column, &'a str)> {
        match self.next() {
            Some(Token::Word(s)) => Ok((self.column(), s.as_str())),
            _ => Err(error!(Malformed; "INVALID/MISSING ARGUMENTS")),
        }
    }

    /// Everything left on the line, as written.
    fn rest(&mut self) -> Result<(Column, String)> {
        let remaining = self.token_stream.as_slice();
        let mut start = self.col.end;
        for t in remaining.iter().take_while(|t| t.is_whitespace()) {
            start += t.len();
        }
        let s: String = remaining.iter().map(|t| t.to_string()).collect();
        let s = s.trim_start().to_string();
        if s.is_empty() {
            return Err(error!(Malformed; "INVALID/MISSING ARGUMENTS"));
        }
        self.col = start..start + s.chars().count();
        while self.token_stream.next().is_some() {}
        Ok((self.column(), s))
    }
}

impl Statement {
    fn for_opcode(parse: &mut Parser, opcode: Opcode) -> Result<Statement> {
        let column = parse.column();
        use Opcode::*;
        match opcode {
            Move => Self::r#mov(parse, column),
            Clear => Ok(Statement::Clear(column, parse.ident()?)),
            Add => Ok(Statement::Add(column, parse.ident()?, parse.ident()?)),
            Subtract => Ok(Statement::Subtract(column, parse.ident()?, parse.ident()?)),
            Multiply => Ok(Statement::Multiply(column, parse.ident()?, parse.ident()?)),
            Divide => Ok(Statement::Divide(column, parse.ident()?, parse.ident()?)),
            Modulo => Ok(Statement::Modulo(column, parse.ident()?, parse.ident()?)),
            Compare => Ok(Statement::Compare(column, parse.ident()?, parse.ident()?)),
            Label => Ok(Statement::Label(column, parse.ident()?)),
            Jump => Self::r#jump(parse, column, Condition::Always),
            JumpEqual => Self::r#jump(parse, column, Condition::Equal),
            JumpNotEqual => Self::r#jump(parse, column, Condition::NotEqual),
            JumpLess => Self::r#jump(parse, column, Condition::Less),
            JumpGreater => Self::r#jump(parse, column, Condition::Greater),
            JumpGreaterEqual => Self::r#jump(parse, column, Condition::GreaterEqual),
            JumpLessEqual => Self::r#jump(parse, column, Condition::LessEqual),
            Call => Ok(Statement::Call(column, parse.ident()?)),
            Return => Ok(Statement::Return(column)),
            Push => Ok(Statement::Push(column, parse.ident()?)),
            Pop => Ok(Statement::Pop(column, parse.ident()?)),
            Print => Ok(Statement::Print(column, parse.ident()?)),
            Ask => Ok(Statement::Ask(column, parse.ident()?)),
            ReadFile => Ok(Statement::ReadFile(column, parse.ident()?, parse.ident()?)),
            WriteFile => Ok(Statement::WriteFile(column, parse.ident()?, parse.ident()?)),
            System => Ok(Statement::System(column, parse.ident()?, parse.ident()?)),
            Sleep => Ok(Statement::Sleep(column, parse.ident()?)),
            Exit => Ok(Statement::Exit(column, parse.ident()?)),
            Debug => Self::r#dbg(parse, column),
        }
    }

    fn r#mov(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = parse.ident()?;
        let (col, s) = parse.rest()?;
        let literal = literal(&s).map_err(|e| e.in_column(&col))?;
        Ok(Statement::Move(column, ident, literal))
    }

    fn r#jump(parse: &mut Parser, column: Column, condition: Condition) -> Result<Statement> {
        Ok(Statement::Jump(column, condition, parse.ident()?))
    }

    fn r#dbg(parse: &mut Parser, column: Column) -> Result<Statement> {
        let (category_col, category) = parse.word()?;
        let on = match parse.word()? {
            (_, "on") => true,
            (_, "off") => false,
            _ => return Err(error!(Malformed; "VALUE MUST BE EITHER 'on' OR 'off'")),
        };
        match Category::from_name(category) {
            Some(category) => Ok(Statement::Debug(column, category, on)),
            None => Err(error!(InvalidDebugCategory, ..&category_col)),
        }
    }
}
