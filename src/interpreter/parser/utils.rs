use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Reports whether any token is left after parsing.
pub fn has_remaining_tokens<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().is_some()
}

/// Requires that the whole line has been consumed.
///
/// A line holds exactly one statement, so anything after it (as in `2 3` or
/// `a = 1 b`) is a syntax error.
///
/// # Errors
/// Returns `ParseError::UnexpectedTrailingTokens` naming the first leftover
/// token.
pub fn expect_end<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if !has_remaining_tokens(tokens) {
        return Ok(());
    }
    match tokens.next() {
        Some((token, column)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                       column: *column, })
        },
        None => Ok(()),
    }
}
