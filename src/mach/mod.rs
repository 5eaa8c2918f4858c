/*!
## Rust Machine Module

This Rust module compiles counter machine programs and runs them
one instruction at a time, keeping a trace of every state it passes.

*/

pub type Address = usize;

/// Name of the variable a program leaves its result in.
pub const OUTPUT: &str = "Y";

mod compile;
mod function;
mod link;
mod program;
mod snapshot;
mod var;

pub use compile::compile;
pub use function::{Function, Macros};
pub use link::Link;
pub use program::{Event, Halt, Program};
pub use snapshot::{History, Snapshot};
pub use var::Var;

#[cfg(test)]
mod tests;
