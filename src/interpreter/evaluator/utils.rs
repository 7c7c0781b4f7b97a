use std::rc::Rc;

use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

impl Environment {
    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value`. Literals never
    /// produce errors.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let value = Environment::eval_literal(&7.into());
    /// assert_eq!(value, Value::Integer(7));
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        Value::from(value)
    }

    /// Looks up a name.
    ///
    /// Variables shadow the globals; a name found in neither is an
    /// `UnknownName` error.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(10));
    ///
    /// assert_eq!(env.eval_variable("x", 1).unwrap(), Value::Integer(10));
    /// assert!(env.eval_variable("y", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, column: usize) -> EvalResult<Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnknownName { name: name.to_string(),
                                                       column })
    }

    /// Evaluates the elements of a tuple or list display, left to right.
    pub(crate) fn eval_elements(&self, elements: &[Expr]) -> EvalResult<Rc<Vec<Value>>> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Rc::new(values))
    }
}

/// Checks that a builtin received one of the `accepted` argument counts.
///
/// ## Example
/// ```
/// use reckon::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let args = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity("comb", &args, &[2], 15).is_ok());
/// assert!(check_arity("sqrt", &args, &[1], 15).is_err());
/// ```
pub fn check_arity<T>(function: &'static str,
                      args: &[T],
                      accepted: &[usize],
                      column: usize)
                      -> EvalResult<()> {
    if accepted.contains(&args.len()) {
        return Ok(());
    }
    Err(RuntimeError::ArgumentCountMismatch { function,
                                              expected: describe_counts(accepted),
                                              found: args.len(),
                                              column })
}

/// Describes argument counts for error messages: `exactly 1`, `1 or 2`.
pub(crate) fn describe_counts(accepted: &[usize]) -> String {
    match accepted {
        [count] => format!("exactly {count}"),
        _ => accepted.iter()
                     .map(ToString::to_string)
                     .collect::<Vec<_>>()
                     .join(" or "),
    }
}
