#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Remark(String),
    Literal(Literal),
    Word(String),
}

impl Token {
    /// Width in characters, used to derive columns.
    pub fn len(&self) -> usize {
        match self {
            Token::Whitespace(len) => *len,
            _ => self.to_string().chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Remark(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
        }
    }
}

/// Literal text exactly as written. Conversion happens in the parser.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(String),
    Real(String),
    Text(char, String),
}

impl Literal {
    /// Classify an unquoted run of characters.
    pub fn classify(s: &str) -> Option<Literal> {
        if is_integer(s) {
            return Some(Literal::Integer(s.to_string()));
        }
        if let Some(body) = s.strip_suffix('f') {
            if is_real(body) {
                return Some(Literal::Real(s.to_string()));
            }
        }
        None
    }
}

fn unsigned(s: &str) -> &str {
    s.strip_prefix(['-', '+']).unwrap_or(s)
}

fn is_integer(s: &str) -> bool {
    let digits = unsigned(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_real(s: &str) -> bool {
    let body = unsigned(s);
    body.chars().any(|c| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.matches('.').count() <= 1
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            Real(s) => write!(f, "{}", s),
            Text(q, s) => write!(f, "{}{}{}", q, s, q),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Opcode {
    Move,
    Clear,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Label,
    Compare,
    Jump,
    JumpEqual,
    JumpNotEqual,
    JumpLess,
    JumpGreater,
    JumpGreaterEqual,
    JumpLessEqual,
    Pop,
    Push,
    Print,
    Ask,
    ReadFile,
    WriteFile,
    System,
    Call,
    Return,
    Debug,
    Sleep,
    Exit,
}

const MNEMONICS: [(&str, Opcode); 28] = [
    ("mov", Opcode::Move),
    ("clr", Opcode::Clear),
    ("add", Opcode::Add),
    ("sub", Opcode::Subtract),
    ("mlt", Opcode::Multiply),
    ("div", Opcode::Divide),
    ("mod", Opcode::Modulo),
    ("lbl", Opcode::Label),
    ("cmp", Opcode::Compare),
    ("jmp", Opcode::Jump),
    ("jeq", Opcode::JumpEqual),
    ("jne", Opcode::JumpNotEqual),
    ("jlt", Opcode::JumpLess),
    ("jgt", Opcode::JumpGreater),
    ("jge", Opcode::JumpGreaterEqual),
    ("jle", Opcode::JumpLessEqual),
    ("pop", Opcode::Pop),
    ("psh", Opcode::Push),
    ("prt", Opcode::Print),
    ("ask", Opcode::Ask),
    ("ifl", Opcode::ReadFile),
    ("ofl", Opcode::WriteFile),
    ("sys", Opcode::System),
    ("run", Opcode::Call),
    ("ret", Opcode::Return),
    ("dbg", Opcode::Debug),
    ("slp", Opcode::Sleep),
    ("ext", Opcode::Exit),
];

impl Opcode {
    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        MNEMONICS
            .iter()
            .find(|(mnemonic, _)| *mnemonic == s)
            .map(|(_, opcode)| *opcode)
    }

    pub fn mnemonic(self) -> &'static str {
        MNEMONICS
            .iter()
            .find(|(_, opcode)| *opcode == self)
            .map(|(mnemonic, _)| *mnemonic)
            .unwrap_or("???")
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
