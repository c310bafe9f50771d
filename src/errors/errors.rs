use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recorded, non-fatal parse diagnostic.
///
/// The `Display` output is the human-readable message handed to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixHandler { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixHandler { .. } => "NoPrefixHandler",
            ParseError::IntegerParse { .. } => "IntegerParse",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }
}
