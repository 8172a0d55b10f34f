//! # Pine
//!
//! Command line interpreter for the pine language.

mod term;

fn main() {
    term::main();
}
