use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use a variable that no earlier line assigned.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A `#N` reference that points at the current line, a later line, or a
    /// line that does not exist.
    #[error("Invalid line reference #{line_number}: line {current_line} can only reference lines before it.")]
    InvalidLineReference {
        /// The referenced 1-based line number.
        line_number:  usize,
        /// The 1-based number of the line containing the reference.
        current_line: usize,
    },
    /// A `#N` reference to a line whose own outcome is an error.
    #[error("Line #{line_number} has an error.")]
    ReferencedLineIsError {
        /// The referenced 1-based line number.
        line_number: usize,
    },
}
