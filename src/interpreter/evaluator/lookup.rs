use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        outcome::Outcome,
    },
};

impl Context<'_> {
    /// Looks up the value of a variable.
    ///
    /// Names are matched exactly; `Total` and `total` are different variables.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no earlier line of this
    /// pass assigned the variable.
    pub fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.scope
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned() })
    }

    /// Resolves a `#N` reference against the outcomes of earlier lines.
    ///
    /// Only lines strictly before the current one can be referenced; a line
    /// can never see itself or anything below it. A referenced empty line
    /// counts as `0`, and a referenced line whose value is `NaN` (a division
    /// by zero) yields `NaN`.
    ///
    /// # Parameters
    /// - `line_number`: The 1-based line number after `#`.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidLineReference` for `#0`, self references,
    ///   forward references and lines that do not exist.
    /// - `RuntimeError::ReferencedLineIsError` if the referenced line failed.
    pub fn eval_line_ref(&self, line_number: usize) -> EvalResult<f64> {
        let invalid = || RuntimeError::InvalidLineReference { line_number,
                                                              current_line: self.line_index + 1 };

        let index = line_number.checked_sub(1).ok_or_else(invalid)?;
        if index >= self.line_index {
            return Err(invalid());
        }

        match self.history.get(index).map(|outcome| &outcome.kind) {
            Some(Outcome::Value(value)) => Ok(*value),
            Some(Outcome::Empty) => Ok(0.0),
            Some(Outcome::Error(_)) => Err(RuntimeError::ReferencedLineIsError { line_number }),
            None => Err(invalid()),
        }
    }
}
