use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    column: Column,
    message: String,
    text: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
            text: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attach the source line. The first attachment wins.
    pub fn in_line(mut self, line_number: LineNumber, text: &str) -> Error {
        if self.line_number.is_none() {
            self.line_number = Some(line_number);
            self.text = text.to_string();
        }
        self
    }

    /// Attach the offending column. The first attachment wins.
    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        self.message = message.to_string();
        self
    }

    /// The report without the source line.
    pub fn summary(&self) -> String {
        let mut s = self.code.to_string();
        if let Some(line_number) = self.line_number {
            s.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            s.push_str(&format!("; {}", self.message));
        }
        s
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Malformed = 1,
    UndefinedBinding = 2,
    TypeMismatch = 3,
    EmptyStack = 4,
    EmptyCallStack = 5,
    LabelRedeclared = 6,
    FileUnavailable = 7,
    CommandFailed = 8,
    InvalidDebugCategory = 9,
    Overflow = 10,
    DivisionByZero = 11,
    Break = 12,
    SourceUnreadable = 13,
    InternalError = 51,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            Malformed => "INVALID INSTRUCTION",
            UndefinedBinding => "UNDEFINED BINDING",
            TypeMismatch => "TYPE MISMATCH",
            EmptyStack => "EMPTY STACK",
            EmptyCallStack => "EMPTY CALL STACK",
            LabelRedeclared => "LABEL REDECLARED",
            FileUnavailable => "FILE UNAVAILABLE",
            CommandFailed => "COMMAND FAILED",
            InvalidDebugCategory => "INVALID DEBUG CATEGORY",
            Overflow => "OVERFLOW",
            DivisionByZero => "DIVISION BY ZERO",
            Break => "BREAK",
            SourceUnreadable => "SOURCE UNREADABLE",
            InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.summary())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.summary())?;
        if let Some(line_number) = self.line_number {
            write!(f, "\n  [{}]: {}", line_number, self.text)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
