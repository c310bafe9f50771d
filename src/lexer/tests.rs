//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Illegal input and end-of-input behaviour

use super::{
    lexer::{scan, tokenize, Lexer},
    tokens::{Token, TokenKind},
};

#[test]
fn test_tokenize_single_char_operators() {
    let expected = [
        ('=', TokenKind::Assign),
        ('+', TokenKind::Plus),
        ('-', TokenKind::Minus),
        ('*', TokenKind::Asterisk),
        ('/', TokenKind::Slash),
        ('<', TokenKind::Lt),
        ('>', TokenKind::Gt),
        ('(', TokenKind::LParen),
        (')', TokenKind::RParen),
        ('{', TokenKind::LBrace),
        ('}', TokenKind::RBrace),
        (',', TokenKind::Comma),
        (';', TokenKind::Semicolon),
    ];

    for (ch, kind) in expected {
        let tokens = tokenize(&ch.to_string());
        assert_eq!(tokens.len(), 2, "input {:?}", ch);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].literal, ch.to_string());
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_delimiter_run() {
    let tokens = tokenize("=+(){},;");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[8].literal, "");
}

#[test]
fn test_tokenize_two_char_operators() {
    let tokens = tokenize("10 == 10; 10 != 9;");

    assert_eq!(tokens[1].kind, TokenKind::Eq);
    assert_eq!(tokens[1].literal, "==");
    assert_eq!(tokens[5].kind, TokenKind::NotEq);
    assert_eq!(tokens[5].literal, "!=");
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_tokenize_bang_and_assign_alone() {
    let tokens = tokenize("!x = =!");

    assert_eq!(tokens[0].kind, TokenKind::Bang);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Assign);
    assert_eq!(tokens[4].kind, TokenKind::Bang);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _under letter Let");

    for (i, name) in ["foo", "bar_baz", "_under", "letter", "Let"].iter().enumerate() {
        assert_eq!(tokens[i].kind, TokenKind::Identifier);
        assert_eq!(tokens[i].literal, *name);
    }
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("abc123");

    assert_eq!(tokens[0], Token { kind: TokenKind::Identifier, literal: "abc".to_string() });
    assert_eq!(tokens[1], Token { kind: TokenKind::Int, literal: "123".to_string() });
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("5 10 007 -3");

    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "007");
    assert_eq!(tokens[3].kind, TokenKind::Minus);
    assert_eq!(tokens[4].kind, TokenKind::Int);
    assert_eq!(tokens[4].literal, "3");
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;\n\tlet ten = 10;\r\n");
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_illegal() {
    let tokens = tokenize("a @ é #");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].literal, "é");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_embedded_nul_is_illegal() {
    let tokens = tokenize("a\0b");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].literal, "b");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = scan("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_and_whitespace_only() {
    assert_eq!(tokenize(""), vec![Token { kind: TokenKind::EOF, literal: String::new() }]);
    assert_eq!(tokenize(" \t\r\n ").len(), 1);
}

#[test]
fn test_iterator_stops_before_eof() {
    let literals: Vec<String> = Lexer::new("let x = 1;").map(|t| t.literal).collect();

    assert_eq!(literals, vec!["let", "x", "=", "1", ";"]);
}

#[test]
fn test_token_from_char() {
    assert_eq!(Token::from_char('*').kind, TokenKind::Asterisk);
    assert_eq!(Token::from_char('$').kind, TokenKind::Illegal);
    assert_eq!(Token::from_char('$').literal, "$");
}

#[test]
fn test_lookup_ident() {
    assert_eq!(TokenKind::lookup_ident("return"), TokenKind::Return);
    assert_eq!(TokenKind::lookup_ident("returns"), TokenKind::Identifier);
    assert_eq!(TokenKind::lookup_ident("FN"), TokenKind::Identifier);
}

#[test]
fn test_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::Let.to_string(), "LET");
}
