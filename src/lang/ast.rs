use super::token::Opcode;
use super::Column;
use std::cmp::Ordering;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Blank,
    Remark(Column),
    Move(Column, Ident, Literal),
    Clear(Column, Ident),
    Add(Column, Ident, Ident),
    Subtract(Column, Ident, Ident),
    Multiply(Column, Ident, Ident),
    Divide(Column, Ident, Ident),
    Modulo(Column, Ident, Ident),
    Compare(Column, Ident, Ident),
    Label(Column, Ident),
    Jump(Column, Condition, Ident),
    Call(Column, Ident),
    Return(Column),
    Push(Column, Ident),
    Pop(Column, Ident),
    Print(Column, Ident),
    Ask(Column, Ident),
    ReadFile(Column, Ident, Ident),
    WriteFile(Column, Ident, Ident),
    System(Column, Ident, Ident),
    Sleep(Column, Ident),
    Exit(Column, Ident),
    Debug(Column, Category, bool),
}

impl Statement {
    /// `None` for blank lines and remarks.
    pub fn opcode(&self) -> Option<Opcode> {
        use Statement::*;
        Some(match self {
            Blank | Remark(_) => return None,
            Move(..) => Opcode::Move,
            Clear(..) => Opcode::Clear,
            Add(..) => Opcode::Add,
            Subtract(..) => Opcode::Subtract,
            Multiply(..) => Opcode::Multiply,
            Divide(..) => Opcode::Divide,
            Modulo(..) => Opcode::Modulo,
            Compare(..) => Opcode::Compare,
            Label(..) => Opcode::Label,
            Jump(_, condition, _) => condition.opcode(),
            Call(..) => Opcode::Call,
            Return(..) => Opcode::Return,
            Push(..) => Opcode::Push,
            Pop(..) => Opcode::Pop,
            Print(..) => Opcode::Print,
            Ask(..) => Opcode::Ask,
            ReadFile(..) => Opcode::ReadFile,
            WriteFile(..) => Opcode::WriteFile,
            System(..) => Opcode::System,
            Sleep(..) => Opcode::Sleep,
            Exit(..) => Opcode::Exit,
            Debug(..) => Opcode::Debug,
        })
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Ident {
    pub column: Column,
    pub name: Rc<str>,
}

impl Ident {
    pub fn new(column: Column, name: &str) -> Ident {
        Ident {
            column,
            name: name.into(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Text(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Condition {
    Always,
    Equal,
    NotEqual,
    Less,
    Greater,
    GreaterEqual,
    LessEqual,
}

impl Condition {
    pub fn holds(self, ordering: Ordering) -> bool {
        use Condition::*;
        match self {
            Always => true,
            Equal => ordering == Ordering::Equal,
            NotEqual => ordering != Ordering::Equal,
            Less => ordering == Ordering::Less,
            Greater => ordering == Ordering::Greater,
            GreaterEqual => ordering != Ordering::Less,
            LessEqual => ordering != Ordering::Greater,
        }
    }

    pub fn opcode(self) -> Opcode {
        use Condition::*;
        match self {
            Always => Opcode::Jump,
            Equal => Opcode::JumpEqual,
            NotEqual => Opcode::JumpNotEqual,
            Less => Opcode::JumpLess,
            Greater => Opcode::JumpGreater,
            GreaterEqual => Opcode::JumpGreaterEqual,
            LessEqual => Opcode::JumpLessEqual,
        }
    }
}

/// Trace categories toggled by `dbg`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    All,
    Comment,
    Map,
    Stack,
    Label,
    Flags,
    Jump,
    Dispatch,
    Line,
}

impl Category {
    pub fn from_name(s: &str) -> Option<Category> {
        use Category::*;
        match s {
            "all" => Some(All),
            "cmt" => Some(Comment),
            "map" => Some(Map),
            "stk" => Some(Stack),
            "lbl" => Some(Label),
            "flg" => Some(Flags),
            "jmp" => Some(Jump),
            "ins" | "rgx" => Some(Dispatch),
            "lne" => Some(Line),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        use Category::*;
        match self {
            All => "all",
            Comment => "cmt",
            Map => "map",
            Stack => "stk",
            Label => "lbl",
            Flags => "flg",
            Jump => "jmp",
            Dispatch => "ins",
            Line => "lne",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
