#![allow(clippy::module_inception)]

//! Scanner and Pratt parser front end for a small expression-and-statement
//! language.
//!
//! `parse` is the entry point most callers need: it turns source text into a
//! `Program` plus the diagnostics recorded along the way.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod parser;
pub mod repl;

pub use ast::ast::Program;
pub use lexer::lexer::{scan, Lexer};
pub use parser::parser::parse;
