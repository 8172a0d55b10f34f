use super::{Binding, Link, Stack, Var};
use crate::lang::ast::Category;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Write;

/// ## Debug trace switches
///
/// `all` is an umbrella: while it is on every category reports,
/// whatever its own switch says.
#[derive(Debug, Default, Clone)]
pub struct Trace {
    on: HashSet<Category>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    pub fn set(&mut self, category: Category, on: bool) {
        if on {
            self.on.insert(category);
        } else {
            self.on.remove(&category);
        }
    }

    pub fn is_on(&self, category: Category) -> bool {
        self.on.contains(&Category::All) || self.on.contains(&category)
    }

    pub fn map(vars: &Var) -> String {
        let mut s = String::from("map:\n");
        for (name, val) in vars.iter() {
            let _ = write!(
                s,
                "  {}\n    key  -> {}\n    val  -> {}\n    type -> {}\n",
                name,
                name,
                val.payload(),
                val.kind()
            );
        }
        s
    }

    pub fn stack(stack: &Stack<Binding>) -> String {
        let mut s = String::from("stack:\n");
        for binding in stack.iter() {
            let _ = write!(
                s,
                "  {}\n    key  -> {}\n    val  -> {}\n    type -> {}\n",
                binding.name,
                binding.name,
                binding.val.payload(),
                binding.val.kind()
            );
        }
        s
    }

    pub fn labels(link: &Link) -> String {
        let mut s = String::from("labels:\n");
        for (label, line_number) in link.labels() {
            let _ = writeln!(s, "  {} -> {}", label, line_number);
        }
        s
    }

    pub fn flags(&self, compare: Ordering, seeking: Option<&str>) -> String {
        let cmp = match compare {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        };
        format!(
            "flags:\n  cmp -> {}\n  dbg:\n    all -> {}\n  jmp:\n    now -> {}\n    lbl -> {}\n",
            cmp,
            self.on.contains(&Category::All),
            seeking.is_some(),
            seeking.unwrap_or("")
        )
    }
}
