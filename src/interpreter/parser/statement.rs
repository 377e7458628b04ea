use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the single statement of a line.
///
/// A statement is either an assignment (`name = expression`) or an expression
/// on its own. An assignment is only attempted when the first two tokens are
/// an identifier followed by `=`; everything else is parsed as an expression.
///
/// Tokens left over after the statement are not an error here; callers check
/// them with [`expect_end`](crate::interpreter::parser::utils::expect_end).
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, column)` pairs.
///
/// # Returns
/// - `Ok(None)` if the line has no tokens at all,
/// - `Ok(Some(statement))` otherwise.
///
/// # Example
/// ```
/// use linepad::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_line},
/// };
///
/// let tokens = tokenize("total = 3 * 4");
/// let statement = parse_line(&mut tokens.iter().peekable()).unwrap();
/// assert!(matches!(statement, Some(Statement::Assignment { ref name, .. }) if name == "total"));
///
/// assert_eq!(parse_line(&mut [].iter().peekable()), Ok(None));
/// ```
pub fn parse_line<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((_, column)) = tokens.peek() else {
        return Ok(None);
    };
    let column = *column;

    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(Some(statement));
    }

    let expr = parse_expression(tokens)?;
    Ok(Some(Statement::Expression { expr, column }))
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a two-token lookahead on a clone of the iterator;
/// if the pattern does not match it returns `Ok(None)` without consuming
/// anything.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (Some((Token::Identifier(name), column)), Some((Token::Equals, _))) =
        (lookahead.next(), lookahead.next())
    else {
        return Ok(None);
    };

    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    column: *column }))
}
