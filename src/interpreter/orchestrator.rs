use tracing::{debug, trace};

use crate::{
    error::LineError,
    interpreter::{
        evaluator::core::{Context, Scope},
        lexer::tokenize,
        outcome::LineOutcome,
        parser::{statement::parse_line, utils::expect_end},
    },
    util::num::DEFAULT_PRECISION,
};

/// Settings that affect how outcomes are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of fractional digits in displayed values.
    pub precision: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

/// The result of one pass over a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One outcome per input line, in order.
    pub outcomes: Vec<LineOutcome>,
    /// Every variable assigned during the pass, with its last value.
    pub scope:    Scope,
}

/// Evaluates documents line by line.
///
/// Every pass starts from an empty scope and re-evaluates every line, so a
/// variable whose assignment was deleted is undefined again on the next pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interpreter {
    options: Options,
}

impl Interpreter {
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// Runs one full pass over `lines`.
    ///
    /// Lines are evaluated top to bottom. Each line sees the variables
    /// assigned above it and can reference the outcome of any earlier line
    /// with `#N`. A line that fails becomes an error outcome and the pass
    /// carries on with the next line, so the returned list always has exactly
    /// one outcome per input line.
    ///
    /// `previous_scope` is the scope returned by the previous pass. It is not
    /// used to seed this pass; variables missing from the new scope are only
    /// logged.
    ///
    /// # Example
    /// ```
    /// use linepad::interpreter::{evaluator::core::Scope, orchestrator::Interpreter};
    ///
    /// let evaluation = Interpreter::default().run(&["x = 10", "y = x * 2", "y - 5"],
    ///                                             &Scope::new());
    /// let displayed: Vec<_> = evaluation.outcomes.iter().map(|o| o.display.as_str()).collect();
    /// assert_eq!(displayed, ["10", "20", "15"]);
    /// assert_eq!(evaluation.scope.get("y"), Some(&20.0));
    /// ```
    #[must_use]
    pub fn run<S: AsRef<str>>(&self, lines: &[S], previous_scope: &Scope) -> Evaluation {
        debug!(lines = lines.len(), "starting pass");

        let mut scope = Scope::new();
        let mut outcomes: Vec<LineOutcome> = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let outcome = self.run_line(line.as_ref(), index, &mut scope, &outcomes);
            trace!(line = outcome.line_number, display = %outcome.display, "line evaluated");
            outcomes.push(outcome);
        }

        for name in previous_scope.keys().filter(|name| !scope.contains_key(*name)) {
            debug!(%name, "variable no longer defined");
        }
        debug!(errors = outcomes.iter().filter(|o| o.is_error()).count(),
               variables = scope.len(),
               "finished pass");

        Evaluation { outcomes, scope }
    }

    /// Classifies a single line.
    ///
    /// Every failure of the line is turned into its outcome here; nothing
    /// escapes to the pass.
    fn run_line(&self,
                line: &str,
                index: usize,
                scope: &mut Scope,
                history: &[LineOutcome])
                -> LineOutcome {
        let line_number = index + 1;

        if line.trim().is_empty() {
            return LineOutcome::empty(line_number);
        }

        match Self::eval_line(line, index, scope, history) {
            Ok(value) => LineOutcome::value(line_number, value, self.options.precision),
            Err(error) => {
                debug!(line = line_number, %error, "line failed");
                LineOutcome::error(line_number, error)
            },
        }
    }

    /// Tokenizes, parses and evaluates a non-blank line.
    ///
    /// A line that contains no tokens at all (only characters the lexer
    /// drops) evaluates to `0`.
    fn eval_line(line: &str,
                 index: usize,
                 scope: &mut Scope,
                 history: &[LineOutcome])
                 -> Result<f64, LineError> {
        let tokens = tokenize(line);
        let mut iter = tokens.iter().peekable();

        let Some(statement) = parse_line(&mut iter)? else {
            return Ok(0.0);
        };
        expect_end(&mut iter)?;

        Ok(Context::new(scope, history, index).eval_statement(&statement)?)
    }
}

/// Runs one pass with the default [`Options`].
///
/// This is the single entry point collaborators need: hand in the current
/// lines and the scope of the previous pass, get back one outcome per line and
/// the new scope.
///
/// # Example
/// ```
/// use linepad::interpreter::{evaluator::core::Scope, orchestrator::run, outcome::Outcome};
///
/// let evaluation = run(&["10", "#1 + 5", "#3"], &Scope::new());
/// assert_eq!(evaluation.outcomes[1].raw(), Some(15.0));
/// assert!(matches!(evaluation.outcomes[2].kind, Outcome::Error(_)));
/// ```
#[must_use]
pub fn run<S: AsRef<str>>(lines: &[S], previous_scope: &Scope) -> Evaluation {
    Interpreter::default().run(lines, previous_scope)
}

