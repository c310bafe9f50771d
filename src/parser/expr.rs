use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop. Parses an expression whose operators all bind tighter than `bp`.
///
/// On entry `current` is the first token of the expression; on exit it is
/// the last token consumed.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // Every prefix operator and group re-enters here
    if !parser.enter_expr() {
        return None;
    }
    let expr = parse_expr_bp(parser, bp);
    parser.exit_expr();
    expr
}

fn parse_expr_bp(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token().kind;
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        parser.push_error(ParseError::NoPrefixHandler { kind: token_kind });
        return None;
    };
    trace!("nud for {} at {:?}", token_kind, bp);

    let mut left = nud(parser)?;

    // Equal binding powers stop the loop, which keeps chains left-associative
    while !parser.peek_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token().kind).copied() else {
            return Some(left);
        };

        parser.next_token();
        let operator_bp = parser.current_binding_power();
        trace!("led for {} at {:?}", parser.current_token().kind, operator_bp);
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match parse_integer_literal(&token.literal) {
        Some(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        None => {
            parser.push_error(ParseError::IntegerParse {
                literal: token.literal,
            });
            None
        }
    }
}

/// Converts literal digits to an `i64`, detecting the base from the prefix:
/// `0x` hex, `0o` octal, `0b` binary, a bare leading `0` octal, else decimal.
pub fn parse_integer_literal(literal: &str) -> Option<i64> {
    let (digits, radix) = if let Some(rest) = strip_radix_prefix(literal, 'x') {
        (rest, 16)
    } else if let Some(rest) = strip_radix_prefix(literal, 'o') {
        (rest, 8)
    } else if let Some(rest) = strip_radix_prefix(literal, 'b') {
        (rest, 2)
    } else if literal.len() > 1 && literal.starts_with('0') {
        (&literal[1..], 8)
    } else {
        (literal, 10)
    };

    // from_str_radix would otherwise accept a sign
    if !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

fn strip_radix_prefix(literal: &str, marker: char) -> Option<&str> {
    let rest = literal.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.next_token();
    let expr = parse_expr(parser, BindingPower::Default)?;

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(expr)
}
