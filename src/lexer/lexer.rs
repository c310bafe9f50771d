use log::trace;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind};

/// Stands in for the current character once the cursor runs past the input.
const EOF_CHAR: char = '\0';

/// Lazy scanner: hands out one token per `next_token` call.
///
/// Holds no token history; the only lookahead is a single raw character.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    /// Index of `ch` within `source`
    pos: usize,
    /// Index of the next character to read, always `pos + 1` once primed
    read_pos: usize,
    ch: char,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.chars().collect(),
            pos: 0,
            read_pos: 0,
            ch: EOF_CHAR,
        };
        lexer.advance();
        lexer
    }

    /// Moves the cursor forward one character, loading the sentinel past the end.
    pub fn advance(&mut self) {
        self.ch = self.source.get(self.read_pos).copied().unwrap_or(EOF_CHAR);
        self.pos = self.read_pos;
        if self.read_pos <= self.source.len() {
            self.read_pos += 1;
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek_char(&self) -> char {
        self.source.get(self.read_pos).copied().unwrap_or(EOF_CHAR)
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.advance();
        }
    }

    /// Consumes the maximal run of characters accepted by `accept`.
    fn read_while(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.pos;
        while !self.at_eof() && accept(self.ch) {
            self.advance();
        }
        self.source[start..self.pos].iter().collect()
    }

    /// Returns the next token. Total: unknown input degrades to `Illegal`,
    /// and once the input is exhausted every call yields `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "");
        }

        let token = match self.ch {
            '=' if self.peek_char() == '=' => {
                self.advance();
                MK_TOKEN!(TokenKind::Eq, "==")
            }
            '!' if self.peek_char() == '=' => {
                self.advance();
                MK_TOKEN!(TokenKind::NotEq, "!=")
            }
            ch if is_letter(ch) => {
                // The run leaves the cursor on the first character after the word.
                let ident = self.read_while(is_letter);
                let token = Token::from_ident(&ident);
                trace!("scanned {}", token);
                return token;
            }
            ch if ch.is_ascii_digit() => {
                let number = self.read_while(|c| c.is_ascii_digit());
                let token = MK_TOKEN!(TokenKind::Int, number);
                trace!("scanned {}", token);
                return token;
            }
            ch => Token::from_char(ch),
        };

        self.advance();
        trace!("scanned {}", token);
        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Creates a scanner over `source`.
pub fn scan(source: &str) -> Lexer {
    Lexer::new(source)
}

/// Scans all of `source`, returning every token including the trailing `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
