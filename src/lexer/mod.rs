//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (scanner) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Single and two-character operators and delimiters
//! - Recognition of keywords and identifiers
//! - Integer literals (digits only; signs belong to the parser)
//! - Degrading unknown input into `Illegal` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
