//! # slang
//!
//! A compiler and interpreter for a small counter machine language.
//! Variables hold non-negative integers and a program may only add one,
//! subtract one, or jump when a variable is not zero. The result is left
//! in `Y`.
//!
//! ```text
//! # Y <- X
//! [A] IF X != 0 GOTO B
//!     Z <- Z + 1
//!     IF Z != 0 GOTO E
//! [B] X <- X - 1
//!     Y <- Y + 1
//!     Z <- Z + 1
//!     IF Z != 0 GOTO A
//! ```
//!
//! Run a program file with initial values given on the command line:
//! ```text
//! slang copy X=4 --trace
//! ```
//!
//! The same from Rust:
//! ```
//! use slang::mach::{Halt, Program};
//!
//! let lines = [
//!     "[A] IF X != 0 GOTO B",
//!     "Z <- Z + 1",
//!     "IF Z != 0 GOTO E",
//!     "[B] X <- X - 1",
//!     "Y <- Y + 1",
//!     "Z <- Z + 1",
//!     "IF Z != 0 GOTO A",
//! ];
//! let mut program = Program::compile(&lines, vec![("X".to_string(), 4)])?;
//! assert_eq!(program.run()?, Halt::MissingLabel("E".to_string()));
//! assert_eq!(program.output(), 4);
//! # Ok::<(), slang::lang::Error>(())
//! ```
//!
//! Lines that are blank or start with `#` are skipped. A branch to a label
//! that does not exist ends the program without an error. Macro calls such
//! as `Y <- ADD(X1, X2)` run against [`mach::Macros`]; the command line
//! installs the built-in set.

pub mod lang;
pub mod mach;
pub mod term;
