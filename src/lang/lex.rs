use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    PineLexer::lex(s)
}

fn is_pine_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn is_pine_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

fn is_pine_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_pine_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn remark(&mut self) -> Option<Token> {
        Some(Token::Remark(self.chars().by_ref().collect::<String>()))
    }

    fn quoted(&mut self) -> Option<Token> {
        let quote = self.chars().next()?;
        let mut s = String::new();
        loop {
            match self.chars().next() {
                Some(ch) if ch == quote => return Some(Token::Literal(Literal::Text(quote, s))),
                Some(ch) => s.push(ch),
                None => {
                    s.insert(0, quote);
                    return Some(Token::Unknown(s));
                }
            }
        }
    }

    fn run(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if is_pine_whitespace(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        if let Some(literal) = Literal::classify(&s) {
            return Some(Token::Literal(literal));
        }
        if is_pine_word(&s) {
            return Some(Token::Word(s));
        }
        Some(Token::Unknown(s))
    }
}

struct PineLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    leading: bool,
}

impl<'a> Tokenizers<'a> for PineLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for PineLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_pine_whitespace(pk) {
            return self.whitespace();
        }
        let leading = std::mem::replace(&mut self.leading, false);
        if leading && pk == '#' {
            return self.remark();
        }
        if is_pine_quote(pk) {
            return self.quoted();
        }
        self.run()
    }
}

impl<'a> PineLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut tokens = PineLexer {
            chars: s.chars().peekable(),
            leading: true,
        }
        .collect();
        PineLexer::trim_end(&mut tokens);
        tokens
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
    }
}
