//! Diagnostic types for the front end.
//!
//! Nothing in the scanner or parser is fatal. Problems are recorded as
//! `ParseError` values and accumulate in source order:
//!
//! - Expectation mismatches on the lookahead token
//! - Tokens with no expression-starting behaviour
//! - Integer literals that do not fit in 64 bits

pub mod errors;
