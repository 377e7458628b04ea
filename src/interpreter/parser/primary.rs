use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - variable names
/// - line references (`#N`)
/// - parenthesized expressions
///
/// There are no unary operators, so a leading `-` is reported as an
/// unexpected token.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | line_ref
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, column) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Number(value) => Ok(Expr::Literal { value:  *value,
                                                   column: *column, }),
        Token::Identifier(name) => Ok(Expr::Variable { name:   name.clone(),
                                                       column: *column, }),
        Token::LineRef(line_number) => Ok(Expr::LineRef { line_number: *line_number,
                                                          column:      *column, }),
        Token::LParen => parse_grouping(tokens, *column),
        Token::MalformedNumber(literal) => Err(ParseError::MalformedNumber { literal: literal.clone(),
                                                                             column:  *column, }),
        tok => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                 column: *column, }),
    }
}

/// Parses the inside of a parenthesized expression.
///
/// The opening `(` has already been consumed; `open_column` is its position
/// and is reported if the matching `)` never arrives.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open_column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::MissingClosingParen { column: open_column }),
    }
}
