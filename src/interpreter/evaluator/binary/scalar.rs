use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::Operands, core::EvalResult},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates `+`, `-` or `*` on promoted numeric operands.
    ///
    /// Integer arithmetic is checked and reports `Overflow` instead of
    /// wrapping. Real arithmetic follows IEEE 754, so it may produce an
    /// infinity or `nan`.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub` or `Mul`.
    /// - `operands`: The promoted operands.
    /// - `column`: Column of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         environment::Environment, evaluator::binary::core::Operands, value::core::Value,
    ///     },
    /// };
    ///
    /// let r = Environment::eval_scalar_op(BinaryOperator::Mul, Operands::Reals(1.5, 2.0), 1);
    /// assert_eq!(r.unwrap(), Value::Real(3.0));
    ///
    /// let r = Environment::eval_scalar_op(BinaryOperator::Add, Operands::Integers(i64::MAX, 1), 1);
    /// assert!(r.is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          operands: Operands,
                          column: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul, Sub};

        match operands {
            Operands::Integers(a, b) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => unreachable!("not a scalar operator: {op}"),
                };
                result.map(Value::Integer)
                      .ok_or(RuntimeError::Overflow { column })
            },
            Operands::Reals(a, b) => Ok(Value::Real(match op {
                                                        Add => a + b,
                                                        Sub => a - b,
                                                        Mul => a * b,
                                                        _ => unreachable!("not a scalar operator: {op}"),
                                                    })),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::BinaryOperator,
        error::RuntimeError,
        interpreter::{environment::Environment, evaluator::binary::core::Operands, value::core::Value},
    };

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(Environment::eval_scalar_op(BinaryOperator::Mul,
                                               Operands::Integers(i64::MAX, 2),
                                               9),
                   Err(RuntimeError::Overflow { column: 9 }));
        assert_eq!(Environment::eval_scalar_op(BinaryOperator::Sub,
                                               Operands::Integers(i64::MIN, 1),
                                               9),
                   Err(RuntimeError::Overflow { column: 9 }));
    }

    #[test]
    fn real_arithmetic_may_reach_infinity() {
        assert_eq!(Environment::eval_scalar_op(BinaryOperator::Mul,
                                               Operands::Reals(1e308, 10.0),
                                               1),
                   Ok(Value::Real(f64::INFINITY)));
    }
}
