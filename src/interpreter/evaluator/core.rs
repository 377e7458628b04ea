use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::outcome::LineOutcome,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Variable bindings of one pass, keyed by the exact variable name.
pub type Scope = HashMap<String, f64>;

/// Stores the evaluation context of a single line.
///
/// The context borrows the pass-wide scope mutably, so an assignment on this
/// line is visible to every following line, and borrows the outcomes of the
/// lines already evaluated so that `#N` references can be resolved.
///
/// ## Usage
///
/// A `Context` is created by the orchestrator for every line and dropped once
/// the line has been evaluated.
///
/// ```
/// use linepad::interpreter::{
///     evaluator::core::{Context, Scope},
///     lexer::tokenize,
///     parser::statement::parse_line,
/// };
///
/// let mut scope = Scope::new();
/// let tokens = tokenize("rate = 4 * 2");
/// let statement = parse_line(&mut tokens.iter().peekable()).unwrap().unwrap();
///
/// let value = Context::new(&mut scope, &[], 0).eval_statement(&statement).unwrap();
/// assert_eq!(value, 8.0);
/// assert_eq!(scope.get("rate"), Some(&8.0));
/// ```
pub struct Context<'a> {
    /// Variables assigned by earlier lines of this pass.
    pub scope:      &'a mut Scope,
    /// Outcomes of the lines before the current one, indexed from 0.
    pub history:    &'a [LineOutcome],
    /// 0-based index of the line being evaluated.
    pub line_index: usize,
}

impl<'a> Context<'a> {
    /// Creates the context for evaluating the line at `line_index`.
    #[must_use]
    pub const fn new(scope: &'a mut Scope, history: &'a [LineOutcome], line_index: usize) -> Self {
        Self { scope,
               history,
               line_index }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, line references and binary operations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, .. } => self.eval_variable(name),
            Expr::LineRef { line_number, .. } => self.eval_line_ref(*line_number),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Evaluates the statement of a line.
    ///
    /// An assignment evaluates its expression, stores the result in the scope
    /// under the exact variable name (replacing any earlier value) and returns
    /// it. An expression statement simply returns its value.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The value shown as the line's result.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.scope.insert(name.clone(), value);
                Ok(value)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }
}
