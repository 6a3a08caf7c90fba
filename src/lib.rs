//! An interactive shell with single-letter built-in commands.
//!
//! The shell reads one line per prompt, splits it into tokens, and either
//! runs one of a fixed set of built-ins (`C`opy, `D`elete, `E`cho, `H`elp,
//! `L`ist, `M`ake, `P`rint, `W`ipe, e`X`ecute, `Q`uit) or launches the named
//! external program from `PATH`. Every child process is waited for before
//! the next prompt is shown.
//!
//! The main entry point is [`Interpreter`], which owns the read-eval loop.
//! The public modules [`command`], [`env`] and [`lexer`] expose the types a
//! caller needs to drive single lines programmatically.

mod builtin;
pub mod command;
pub mod env;
mod external;
mod interpreter;
pub mod lexer;

pub use interpreter::{Interpreter, LoopState};
