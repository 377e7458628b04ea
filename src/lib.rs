//! # linepad
//!
//! linepad is a line-oriented calculator written in Rust.
//! Every line of a document is an arithmetic expression or a variable
//! assignment. Lines are evaluated top to bottom, can use the variables
//! assigned above them and can refer to the result of an earlier line with
//! `#N`. A line that fails only marks itself as an error; the rest of the
//! document is still evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]
// Not published; there is no repository or homepage to point to.
#![allow(clippy::cargo_common_metadata)]

/// Defines the structure of a parsed line.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a line as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression and statement types of the line grammar.
/// - Attaches source columns to AST nodes for error reporting.
pub mod ast;
/// A document that is re-evaluated whenever its text changes.
///
/// This module wraps the orchestrator for editor-like callers: it keeps the
/// current text, the outcomes of the latest pass and the variables it
/// defined, and renders the annotated document.
pub mod document;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can turn a line into an error outcome.
/// Errors never escape a pass; they are stored in the outcome of the line that
/// raised them.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Carries the details shown to the user for a failed line.
pub mod error;
/// Orchestrates the evaluation of documents.
///
/// This module ties together lexing, parsing, evaluation and outcome
/// classification, and exposes the entry point that evaluates a list of lines
/// against a scope.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator for every line.
/// - Manages the scope and results history of a pass.
/// - Converts per-line failures into outcomes.
pub mod interpreter;
/// General utilities for displaying numbers.
pub mod util;

pub use document::Document;
pub use interpreter::{
    evaluator::core::Scope,
    orchestrator::{Evaluation, Interpreter, Options, run},
    outcome::{LineOutcome, Outcome},
};

/// Evaluates a whole document given as a single string.
///
/// The text is split on newlines and run as one pass with the given options.
/// Unlike [`Document`], no state is kept between calls.
///
/// # Examples
/// ```
/// use linepad::{Options, evaluate_text};
///
/// let evaluation = evaluate_text("z = 5\n\nz + 1", Options::default());
/// let displayed: Vec<_> = evaluation.outcomes.iter().map(|o| o.display.as_str()).collect();
/// assert_eq!(displayed, ["5", "", "6"]);
///
/// // An error only affects its own line.
/// let evaluation = evaluate_text("1 +\n2 * 3", Options::default());
/// assert!(evaluation.outcomes[0].is_error());
/// assert_eq!(evaluation.outcomes[1].raw(), Some(6.0));
/// ```
#[must_use]
pub fn evaluate_text(text: &str, options: Options) -> Evaluation {
    let mut document = Document::new(options);
    document.set_text(text);
    document.evaluation().clone()
}
