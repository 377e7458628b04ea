/// The evaluator module computes the value of a parsed line.
///
/// The evaluator walks the statement of one line, performs the arithmetic,
/// reads and writes the variables of the current pass and resolves `#N`
/// references against the outcomes of earlier lines.
///
/// # Responsibilities
/// - Evaluates AST nodes to `f64` values.
/// - Stores assignments in the pass-wide scope.
/// - Reports undefined variables and invalid or failing line references.
pub mod evaluator;
/// The lexer module tokenizes a single line.
///
/// The lexer reads the raw text of one line and produces numbers, variable
/// names, line references, operators and parentheses. It never fails:
/// characters that start no token are dropped.
pub mod lexer;
/// The orchestrator module runs whole documents.
///
/// It feeds every line through the lexer, parser and evaluator in order,
/// threads the scope and the results history from line to line, and converts
/// every per-line failure into that line's outcome.
pub mod orchestrator;
/// Per-line outcomes.
///
/// Declares the value/error/empty classification of a line and the text
/// displayed for it.
pub mod outcome;
/// The parser module builds the abstract syntax tree (AST) of a line.
///
/// The parser processes the tokens of one line with recursive descent and
/// standard arithmetic precedence, producing exactly one statement.
///
/// # Responsibilities
/// - Converts tokens into an assignment or expression statement.
/// - Reports syntax errors with the column of the offending token.
pub mod parser;
