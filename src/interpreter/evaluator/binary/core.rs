use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// Numeric operands of a binary operation after promotion.
///
/// Two integers stay integers; any real operand promotes both to reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both operands are integers.
    Integers(i64, i64),
    /// At least one operand was a real.
    Reals(f64, f64),
}

impl Operands {
    /// Promotes two values for arithmetic, or returns `None` if either is not
    /// a number.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::binary::core::Operands, value::core::Value};
    ///
    /// assert_eq!(Operands::promote(&Value::Integer(1), &Value::Real(0.5)),
    ///            Some(Operands::Reals(1.0, 0.5)));
    /// assert_eq!(Operands::promote(&Value::Integer(1), &Value::Integer(2)),
    ///            Some(Operands::Integers(1, 2)));
    /// ```
    #[must_use]
    pub const fn promote(left: &Value, right: &Value) -> Option<Self> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) => Some(Self::Integers(*a, *b)),
            (Integer(a), Real(b)) => Some(Self::Reals(i64_to_f64(*a), *b)),
            (Real(a), Integer(b)) => Some(Self::Reals(*a, i64_to_f64(*b))),
            (Real(a), Real(b)) => Some(Self::Reals(*a, *b)),
            _ => None,
        }
    }
}

impl Environment {
    /// Evaluates a binary operation node.
    ///
    /// Both operands are always evaluated, left first; there is no
    /// short-circuiting.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 column: usize)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, column)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Numeric operands are routed to the arithmetic handlers after
    /// promotion. Lists and tuples support `+` with a sequence of the same
    /// kind and `*` with an integer count. Every other combination is a type
    /// error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `column`: Column of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Add,
    ///                                       &Value::Integer(3),
    ///                                       &Value::Integer(4),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Div,
    ///                                       &Value::Integer(7),
    ///                                       &Value::Integer(2),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       column: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};
        use Value::{Integer, List, Tuple};

        if let Some(operands) = Operands::promote(left, right) {
            return match op {
                Add | Sub | Mul => Self::eval_scalar_op(op, operands, column),
                Div => Self::eval_true_div(operands, column),
                FloorDiv => Self::eval_floor_div(operands, column),
                Mod => Self::eval_mod(operands, column),
                Pow => Self::eval_pow(operands, column),
            };
        }

        match (op, left, right) {
            (Add, List(a), List(b)) => Ok(List(Self::concat(a, b, column)?)),
            (Add, Tuple(a), Tuple(b)) => Ok(Tuple(Self::concat(a, b, column)?)),
            (Mul, List(items), Integer(count)) | (Mul, Integer(count), List(items)) => {
                Ok(List(Self::repeat(items, *count, column)?))
            },
            (Mul, Tuple(items), Integer(count)) | (Mul, Integer(count), Tuple(items)) => {
                Ok(Tuple(Self::repeat(items, *count, column)?))
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("unsupported operand type(s) for {op}: '{}' and '{}'",
                                                               left.type_name(),
                                                               right.type_name()),
                                              column })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        ast::BinaryOperator,
        error::{ErrorKind, RuntimeError},
        interpreter::{environment::Environment, evaluator::function::core::Builtin, value::core::Value},
    };

    fn list(items: &[i64]) -> Value {
        Value::List(Rc::new(items.iter().copied().map(Value::Integer).collect()))
    }

    #[test]
    fn mixed_sequence_kinds_are_type_errors() {
        let tuple = Value::Tuple(Rc::new(vec![Value::Integer(1)]));
        let err = Environment::eval_binary(BinaryOperator::Add, &list(&[1]), &tuple, 3).unwrap_err();
        assert_eq!(err,
                   RuntimeError::TypeError { details: "unsupported operand type(s) for +: 'list' and 'tuple'".to_string(),
                                             column:  3, });
    }

    #[test]
    fn sequences_do_not_support_other_operators() {
        for op in [BinaryOperator::Sub, BinaryOperator::Div, BinaryOperator::Pow] {
            let err = Environment::eval_binary(op, &list(&[1]), &list(&[2]), 1).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
        }
    }

    #[test]
    fn functions_are_not_operands() {
        let err = Environment::eval_binary(BinaryOperator::Add,
                                           &Value::Function(Builtin::Sin),
                                           &Value::Integer(1),
                                           1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn list_times_real_is_a_type_error() {
        let err = Environment::eval_binary(BinaryOperator::Mul, &list(&[1]), &Value::Real(2.0), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
