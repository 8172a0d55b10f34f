use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced vector
///
/// Unbounded. Popping an empty stack is the error given at construction.
pub struct Stack<T> {
    underflow: ErrorCode,
    underflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(underflow: ErrorCode, underflow_message: &'static str) -> Stack<T> {
        Stack {
            underflow,
            underflow_message,
            vec: vec![],
        }
    }
    fn underflow_error(&self) -> Error {
        Error::new(self.underflow).message(self.underflow_message)
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Fails exactly when `pop` would.
    pub fn check(&self) -> Result<()> {
        if self.is_empty() {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
}
