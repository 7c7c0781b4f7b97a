use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

impl Environment {
    /// Evaluates a unary operation node.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                expr: &Expr,
                                column: usize)
                                -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, &value, column)
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity on numbers.
    /// - `Negate`: numeric negation; checked for integers, so `-i64::MIN`
    ///   reports `Overflow`.
    ///
    /// Applying either operator to a sequence or a function is a type error.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::UnaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Plus, &Value::Real(2.5), 1).unwrap();
    /// assert_eq!(v, Value::Real(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, column: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Integer(_) | Value::Real(_)) => Ok(value.clone()),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { column })
            },
            (UnaryOperator::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
            _ => Err(RuntimeError::TypeError { details: format!("bad operand type for unary {op}: '{}'",
                                                                value.type_name()),
                                               column }),
        }
    }
}
