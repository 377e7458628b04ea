/// Entry points shared by every precedence level.
///
/// Declares the parser result type and the top of the expression grammar.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive (`+`, `-`)
/// and multiplicative (`*`, `/`).
pub mod binary;

/// Primary expression parsing.
///
/// Parses the operands of the grammar: numbers, variables, line references and
/// parenthesized expressions.
pub mod primary;

/// Statement parsing.
///
/// Decides whether a line is an assignment or a bare expression and parses it
/// accordingly.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the end-of-line checks the caller runs after a statement has been
/// parsed.
pub mod utils;
