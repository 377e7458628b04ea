/// Parsing errors.
///
/// Defines all error types that can occur while turning a line's tokens into
/// a statement. Parse errors include unexpected tokens, unbalanced
/// parentheses, malformed numeric literals and leftover tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// statement: unknown variables and invalid or failing line references.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure that turns a single line into an error outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
