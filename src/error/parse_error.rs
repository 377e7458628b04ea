use thiserror::Error;

/// Represents all errors that can occur while parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Unexpected token '{token}' at column {column}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the token starts.
        column: usize,
    },
    /// Reached the end of the line while an operand was still expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A `(` was opened at `column` but never closed.
    #[error("Expected closing parenthesis ')' for the one opened at column {column}.")]
    MissingClosingParen {
        /// The column of the unmatched `(`.
        column: usize,
    },
    /// Found extra tokens after a complete statement.
    #[error("Extra tokens after expression, starting with '{token}' at column {column}.")]
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token:  String,
        /// The column where it starts.
        column: usize,
    },
    /// A run of digits and dots that is not a valid number, such as `1.2.3`.
    #[error("Malformed number '{literal}' at column {column}.")]
    MalformedNumber {
        /// The literal as written.
        literal: String,
        /// The column where it starts.
        column:  usize,
    },
}
