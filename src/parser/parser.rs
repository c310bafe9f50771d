//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser keeps a two-token window (`current` and `peek`) over a lazy
//! lexer and uses a Pratt parser approach with NUD/LED handlers for
//! expressions and recursive descent for statements.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Errors never abort a parse. They are collected as diagnostics and the
//! parser resumes at the next statement boundary.

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<ParseError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Expressions currently being parsed, innermost included
    depth: usize,
}

/// Deepest expression nesting accepted before the parser gives up on a statement.
pub const MAX_EXPR_DEPTH: usize = 256;

impl Parser {
    /// Creates a parser over `lexer` with every handler registered and the
    /// window primed, so `current` holds the first token.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: MK_TOKEN!(TokenKind::EOF, ""),
            peek: MK_TOKEN!(TokenKind::EOF, ""),
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser.next_token();
        parser.next_token();
        parser
    }

    /// Slides the window forward by one token.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind`.
    ///
    /// Otherwise records a diagnostic and leaves the window where it is, so
    /// the caller decides how to recover.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.push_error(ParseError::UnexpectedToken {
                expected: kind,
                got: self.peek.kind,
            });
            false
        }
    }

    pub fn push_error(&mut self, error: ParseError) {
        debug!("parse diagnostic: {}", error);
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Diagnostics rendered as messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Enters one level of expression nesting.
    ///
    /// Past `MAX_EXPR_DEPTH` records a diagnostic and refuses, leaving the
    /// depth unchanged.
    pub fn enter_expr(&mut self) -> bool {
        if self.depth >= MAX_EXPR_DEPTH {
            self.push_error(ParseError::NestingTooDeep {
                limit: MAX_EXPR_DEPTH,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn exit_expr(&mut self) {
        self.depth -= 1;
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Gives a token a binding power without an infix handler.
    pub fn binding_power(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    fn starts_statement(&self) -> bool {
        self.stmt_lookup.contains_key(&self.current.kind)
    }

    /// Recovers after a failed statement, leaving `current` on the first
    /// token of the next one.
    ///
    /// Stops past the next `;`, or on the next token that has a statement
    /// handler, whichever comes first.
    fn synchronize(&mut self) {
        loop {
            if self.current_is(TokenKind::Semicolon) {
                self.next_token();
                return;
            }
            if self.current_is(TokenKind::EOF) {
                return;
            }

            self.next_token();
            if self.starts_statement() {
                return;
            }
        }
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are dropped from the tree; the reason
    /// is left in `errors()`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Some(stmt) => {
                    program.statements.push(stmt);
                    self.next_token();
                }
                None => self.synchronize(),
            }
        }

        program
    }
}

/// Parses `source` into a program and the diagnostics recorded on the way.
///
/// This is the main entry point. A non-empty diagnostics list means the
/// program may be missing statements that failed to parse.
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.error_messages())
}
