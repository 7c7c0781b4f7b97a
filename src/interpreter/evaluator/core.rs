use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node kind and reduces the tree depth-first, left to
    /// right. It only reads the environment; nothing an expression does can
    /// change a variable.
    ///
    /// The recursion depth equals the depth of the tree, so trees should be
    /// checked with [`validate`](crate::interpreter::parser::validate::validate)
    /// first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`], or the first [`RuntimeError`] encountered.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{environment::Environment, parser::core::parse, value::core::Value};
    ///
    /// let env = Environment::new();
    /// let tree = parse("2 + 3 * 4").unwrap();
    ///
    /// assert_eq!(env.eval(&tree).unwrap(), Value::Integer(14));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, column } => self.eval_variable(name, *column),
            Expr::UnaryOp { op, expr, column } => self.eval_unary_op(*op, expr, *column),
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => self.eval_binary_op(left, *op, right, *column),
            Expr::Call { callee,
                         arguments,
                         keywords,
                         column, } => self.eval_call(callee, arguments, keywords, *column),
            Expr::Tuple { elements, .. } => Ok(Value::Tuple(self.eval_elements(elements)?)),
            Expr::List { elements, .. } => Ok(Value::List(self.eval_elements(elements)?)),
        }
    }
}
