/*!
## Rust Machine Module

This Rust module is the execution engine for Pine. It runs directly
against the source text, one line at a time.

*/

mod link;
mod operation;
mod runtime;
mod stack;
mod trace;
mod val;
mod var;

pub use link::Link;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::PROMPT;
pub use stack::Stack;
pub use trace::Trace;
pub use val::Kind;
pub use val::Val;
pub use var::Binding;
pub use var::Var;

#[cfg(test)]
mod tests;
