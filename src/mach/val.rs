use crate::lang::ast::Literal;

/// ## Typed value of a binding
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Real(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Real,
    Text,
}

impl Val {
    pub fn kind(&self) -> Kind {
        match self {
            Val::Integer(_) => Kind::Integer,
            Val::Real(_) => Kind::Real,
            Val::Text(_) => Kind::Text,
        }
    }

    /// The payload as plain text. Reals keep full precision here;
    /// only `Display` rounds.
    pub fn payload(&self) -> String {
        match self {
            Val::Integer(n) => n.to_string(),
            Val::Real(n) => format!("{:?}", n),
            Val::Text(s) => s.clone(),
        }
    }
}

impl From<Literal> for Val {
    fn from(literal: Literal) -> Val {
        match literal {
            Literal::Integer(n) => Val::Integer(n),
            Literal::Real(n) => Val::Real(n),
            Literal::Text(s) => Val::Text(s),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Real(n) => write!(f, "{:.1}", n),
            Val::Text(s) => write!(f, "{}", s),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Integer => write!(f, "int"),
            Kind::Real => write!(f, "dbl"),
            Kind::Text => write!(f, "str"),
        }
    }
}
