use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token().kind)
        .copied()
    {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Default)?;
    skip_optional_semicolon(parser);

    Some(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    parser.next_token();

    let return_value = parse_expr(parser, BindingPower::Default)?;
    skip_optional_semicolon(parser);

    Some(Stmt::Return(ReturnStmt {
        token,
        return_value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;
    skip_optional_semicolon(parser);

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}
