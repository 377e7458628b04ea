use crate::interpreter::{
    evaluator::core::Scope,
    orchestrator::{Evaluation, Interpreter, Options},
    outcome::{ERROR_MARKER, LineOutcome, Outcome},
};

/// A multi-line document and the result of its latest pass.
///
/// `Document` is what an editor holds on to: every time the text changes,
/// [`Document::set_text`] re-runs the whole document and keeps the new
/// outcomes and scope.
///
/// # Example
/// ```
/// use linepad::{Document, Options};
///
/// let mut document = Document::new(Options::default());
/// document.set_text("price = 12\nqty = 3\nprice * qty");
/// assert_eq!(document.outcomes()[2].display, "36");
/// assert_eq!(document.variables(), vec![("price", 12.0), ("qty", 3.0)]);
///
/// document.set_text("qty = 3\nprice * qty");
/// assert!(document.outcomes()[1].is_error());
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    text:        String,
    interpreter: Interpreter,
    evaluation:  Evaluation,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let mut document = Self { text:        String::new(),
                                  interpreter: Interpreter::new(options),
                                  evaluation:  Evaluation { outcomes: Vec::new(),
                                                            scope:    Scope::new(), }, };
        document.set_text("");
        document
    }

    /// Replaces the text and runs a new pass over it.
    ///
    /// The text is split on `\n`; a `\r` at the end of a line is ignored.
    pub fn set_text(&mut self, text: impl Into<String>) -> &Evaluation {
        self.text = text.into();
        let lines: Vec<&str> = split_lines(&self.text).collect();
        let evaluation = self.interpreter.run(&lines, &self.evaluation.scope);
        self.evaluation = evaluation;
        &self.evaluation
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the lines of the document as they are evaluated.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        split_lines(&self.text)
    }

    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    #[must_use]
    pub fn outcomes(&self) -> &[LineOutcome] {
        &self.evaluation.outcomes
    }

    /// Returns the variables defined by the document, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(&str, f64)> {
        let mut variables: Vec<_> = self.evaluation
                                        .scope
                                        .iter()
                                        .map(|(name, value)| (name.as_str(), *value))
                                        .collect();
        variables.sort_by(|a, b| a.0.cmp(b.0));
        variables
    }

    /// Renders the document with each result next to its line.
    ///
    /// Lines are padded to a common width and followed by `= result`. A
    /// failed line shows the error marker and the error message; blank lines
    /// stay blank.
    ///
    /// ```
    /// use linepad::{Document, Options};
    ///
    /// let mut document = Document::new(Options::default());
    /// document.set_text("a = 2\n\na * 21");
    /// assert_eq!(document.render(), "a = 2  = 2\n\na * 21 = 42");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let width = self.lines().map(|line| line.chars().count()).max().unwrap_or(0);

        self.lines()
            .zip(self.outcomes())
            .map(|(line, outcome)| match &outcome.kind {
                Outcome::Empty => line.to_string(),
                Outcome::Value(_) => format!("{line:<width$} = {}", outcome.display),
                Outcome::Error(error) => format!("{line:<width$} {ERROR_MARKER} {error}"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Splits text into editor lines, dropping the `\r` of `\r\n` endings.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
