use super::Val;
use crate::error;
use crate::lang::{literal, Error};
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Binding memory
///
/// Bindings are created on first assignment and only go away with `clear`.
#[derive(Debug, Default)]
pub struct Var {
    vars: BTreeMap<Rc<str>, Val>,
}

/// A binding lifted out of memory, as kept on the value stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Rc<str>,
    pub val: Val,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Assign from literal source text, inferring the kind.
    pub fn set(&mut self, var_name: &str, literal_text: &str) -> Result<()> {
        let val = Val::from(literal(literal_text)?);
        self.store(var_name, val);
        Ok(())
    }

    pub fn store(&mut self, var_name: &str, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        }
    }

    pub fn fetch(&self, var_name: &str) -> Result<&Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val),
            None => Err(undefined(var_name)),
        }
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.vars.contains_key(var_name)
    }

    pub fn snapshot(&self, var_name: &str) -> Result<Binding> {
        match self.vars.get_key_value(var_name) {
            Some((name, val)) => Ok(Binding {
                name: name.clone(),
                val: val.clone(),
            }),
            None => Err(undefined(var_name)),
        }
    }

    pub fn clear(&mut self, var_name: &str) -> Result<()> {
        match self.vars.remove(var_name) {
            Some(_) => Ok(()),
            None => Err(undefined(var_name)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Val)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn undefined(var_name: &str) -> Error {
    error!(UndefinedBinding; &format!("{} DOES NOT EXIST", var_name))
}
