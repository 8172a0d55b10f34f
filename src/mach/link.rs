use crate::error;
use crate::lang::{Error, LineNumber};
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Label and position memory
///
/// Both tables only grow as lines are read. A label is known once the
/// line declaring it has been read, and a line can be returned to once
/// it has been read. There is no pre-pass.
#[derive(Debug, Default)]
pub struct Link {
    labels: BTreeMap<Rc<str>, LineNumber>,
    positions: BTreeMap<LineNumber, u64>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    /// Record the source offset just past `line_number`.
    pub fn insert_position(&mut self, line_number: LineNumber, offset: u64) {
        self.positions.insert(line_number, offset);
    }

    pub fn position(&self, line_number: LineNumber) -> Option<u64> {
        self.positions.get(&line_number).copied()
    }

    /// Returns true when the label is new. Seeing the same label again on
    /// its own line is fine; on any other line it is an error.
    pub fn declare(&mut self, label: &Rc<str>, line_number: LineNumber) -> Result<bool> {
        match self.labels.get(label) {
            None => {
                self.labels.insert(label.clone(), line_number);
                Ok(true)
            }
            Some(&declared) if declared == line_number => Ok(false),
            Some(&declared) => Err(error!(LabelRedeclared;
                &format!("{} WAS DECLARED IN {}", label, declared))),
        }
    }

    pub fn label(&self, label: &str) -> Option<LineNumber> {
        self.labels.get(label).copied()
    }

    pub fn labels(&self) -> impl Iterator<Item = (&Rc<str>, &LineNumber)> {
        self.labels.iter()
    }
}
