use crate::{error::LineError, util::num::format_number};

/// Marker displayed in place of a value on a line that failed.
pub const ERROR_MARKER: &str = "⚠";

/// The classified result of one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line produced a number. `NaN` is kept here as the raw value of a
    /// division by zero; it is displayed as `0`.
    Value(f64),
    /// The line could not be parsed or evaluated.
    Error(LineError),
    /// The line is blank.
    Empty,
}

/// The outcome of a line together with its display text.
///
/// Outcomes are built once per line per pass and never modified; the next
/// pass produces a completely new list.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// 1-based number of the line, as used by `#N` references.
    pub line_number: usize,
    /// What the line evaluated to.
    pub kind:        Outcome,
    /// The text shown next to the line.
    pub display:     String,
}

impl LineOutcome {
    /// Builds the outcome of a line that produced `value`.
    #[must_use]
    pub fn value(line_number: usize, value: f64, precision: usize) -> Self {
        Self { line_number,
               kind: Outcome::Value(value),
               display: format_number(value, precision) }
    }

    /// Builds the outcome of a line that failed with `error`.
    #[must_use]
    pub fn error(line_number: usize, error: LineError) -> Self {
        Self { line_number,
               kind: Outcome::Error(error),
               display: ERROR_MARKER.to_string() }
    }

    /// Builds the outcome of a blank line.
    #[must_use]
    pub const fn empty(line_number: usize) -> Self {
        Self { line_number,
               kind: Outcome::Empty,
               display: String::new() }
    }

    /// Returns the raw computed value, if the line produced one.
    #[must_use]
    pub const fn raw(&self) -> Option<f64> {
        match self.kind {
            Outcome::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error of a failed line.
    #[must_use]
    pub const fn error_kind(&self) -> Option<&LineError> {
        match &self.kind {
            Outcome::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the error message of a failed line.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error_kind().map(ToString::to_string)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, Outcome::Error(_))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, Outcome::Empty)
    }
}
