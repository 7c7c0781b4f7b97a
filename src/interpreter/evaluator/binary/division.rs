use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::Operands, core::EvalResult},
        value::core::Value,
    },
    util::num::{floor_div_i64, floor_divmod_f64, floor_mod_i64, i64_to_f64},
};

impl Environment {
    /// Evaluates true division (`/`).
    ///
    /// The result is always a real, even for two integers that divide
    /// evenly.
    ///
    /// # Errors
    /// `DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     environment::Environment, evaluator::binary::core::Operands, value::core::Value,
    /// };
    ///
    /// let r = Environment::eval_true_div(Operands::Integers(6, 3), 1).unwrap();
    /// assert_eq!(r, Value::Real(2.0));
    /// ```
    pub fn eval_true_div(operands: Operands, column: usize) -> EvalResult<Value> {
        let (a, b) = match operands {
            Operands::Integers(a, b) => (i64_to_f64(a), i64_to_f64(b)),
            Operands::Reals(a, b) => (a, b),
        };
        if b == 0.0 {
            return Err(RuntimeError::DivisionByZero { column });
        }
        Ok(Value::Real(a / b))
    }

    /// Evaluates floor division (`//`).
    ///
    /// The quotient is rounded towards negative infinity. Two integers give
    /// an integer; otherwise the result is a real.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor is zero.
    /// - `Overflow` for `i64::MIN // -1`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     environment::Environment, evaluator::binary::core::Operands, value::core::Value,
    /// };
    ///
    /// let r = Environment::eval_floor_div(Operands::Integers(-7, 2), 1).unwrap();
    /// assert_eq!(r, Value::Integer(-4));
    ///
    /// let r = Environment::eval_floor_div(Operands::Reals(7.0, 2.0), 1).unwrap();
    /// assert_eq!(r, Value::Real(3.0));
    /// ```
    pub fn eval_floor_div(operands: Operands, column: usize) -> EvalResult<Value> {
        match operands {
            Operands::Integers(_, 0) => Err(RuntimeError::DivisionByZero { column }),
            Operands::Integers(a, b) => floor_div_i64(a, b).map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { column }),
            Operands::Reals(_, b) if b == 0.0 => Err(RuntimeError::DivisionByZero { column }),
            Operands::Reals(a, b) => Ok(Value::Real(floor_divmod_f64(a, b).0)),
        }
    }

    /// Evaluates modulo (`%`).
    ///
    /// The result has the sign of the divisor, so that
    /// `(a // b) * b + a % b == a`.
    ///
    /// # Errors
    /// `DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     environment::Environment, evaluator::binary::core::Operands, value::core::Value,
    /// };
    ///
    /// let r = Environment::eval_mod(Operands::Integers(-7, 3), 1).unwrap();
    /// assert_eq!(r, Value::Integer(2));
    ///
    /// let r = Environment::eval_mod(Operands::Reals(7.5, -2.0), 1).unwrap();
    /// assert_eq!(r, Value::Real(-0.5));
    /// ```
    pub fn eval_mod(operands: Operands, column: usize) -> EvalResult<Value> {
        match operands {
            Operands::Integers(a, b) => floor_mod_i64(a, b).map(Value::Integer)
                                                           .ok_or(RuntimeError::DivisionByZero { column }),
            Operands::Reals(_, b) if b == 0.0 => Err(RuntimeError::DivisionByZero { column }),
            Operands::Reals(a, b) => Ok(Value::Real(floor_divmod_f64(a, b).1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{environment::Environment, evaluator::binary::core::Operands, value::core::Value},
    };

    #[test]
    fn zero_divisors() {
        for operands in [Operands::Integers(1, 0), Operands::Reals(1.0, 0.0), Operands::Reals(1.0, -0.0)] {
            assert_eq!(Environment::eval_true_div(operands, 2),
                       Err(RuntimeError::DivisionByZero { column: 2 }));
            assert_eq!(Environment::eval_floor_div(operands, 2),
                       Err(RuntimeError::DivisionByZero { column: 2 }));
            assert_eq!(Environment::eval_mod(operands, 2),
                       Err(RuntimeError::DivisionByZero { column: 2 }));
        }
    }

    #[test]
    fn floor_division_overflow() {
        assert_eq!(Environment::eval_floor_div(Operands::Integers(i64::MIN, -1), 1),
                   Err(RuntimeError::Overflow { column: 1 }));
    }

    #[test]
    fn true_division_of_integers() {
        assert_eq!(Environment::eval_true_div(Operands::Integers(7, 2), 1),
                   Ok(Value::Real(3.5)));
    }
}
