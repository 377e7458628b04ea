use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated before the right one; both are always
    /// evaluated before the operator is applied.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// The result of [`Context::eval_scalar_op`].
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        let result = Self::eval_scalar_op(op, left, right);
        trace!(%op, left, right, result, "binary operation");
        Ok(result)
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// Division is total: dividing by zero yields `NaN` instead of an error.
    ///
    /// # Example
    /// ```
    /// use linepad::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0), 3.0);
    /// assert!(Context::eval_scalar_op(BinaryOperator::Div, 5.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => {
                if right == 0.0 {
                    f64::NAN
                } else {
                    left / right
                }
            },
        }
    }
}
