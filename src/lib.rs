//! # Pine
//!
//! A small line oriented scripting language. Every line is one
//! instruction, executed straight from the source file as it is read.
//!
//! Run a script with `pine -f script.pine`. Set `RUST_LOG=debug` to see
//! how labels are found and jumps are resolved.
//!
//! ```text
//! mov greeting 'Hello World'
//! prt greeting
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/instructions.rs"]
#[allow(non_snake_case)]
pub mod __Instructions;

#[path = "doc/control_flow.rs"]
#[allow(non_snake_case)]
pub mod __Control_Flow;

pub mod lang;
pub mod mach;
