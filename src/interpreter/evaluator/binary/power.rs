use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::Operands, core::EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64,
};

impl Environment {
    /// Evaluates an exponentiation operation.
    ///
    /// - An integer base with a non-negative integer exponent uses checked
    ///   integer arithmetic.
    /// - A negative integer exponent yields a real: `2 ** -1 == 0.5`.
    /// - Otherwise both operands are reals and `powf` is used.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power.
    /// - `DomainError` for a negative base with a fractional exponent, whose
    ///   result would be complex.
    /// - `Overflow` if an integer result does not fit into an `i64`, or a
    ///   real result overflows to infinity from finite operands.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     environment::Environment, evaluator::binary::core::Operands, value::core::Value,
    /// };
    ///
    /// let result = Environment::eval_pow(Operands::Integers(2, 10), 1).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Environment::eval_pow(Operands::Integers(2, -1), 1).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(operands: Operands, column: usize) -> EvalResult<Value> {
        match operands {
            Operands::Integers(base, exponent) if exponent >= 0 => {
                Self::integer_pow(base, exponent, column).map(Value::Integer)
            },
            Operands::Integers(base, exponent) => {
                Self::real_pow(i64_to_f64(base), i64_to_f64(exponent), column)
            },
            Operands::Reals(base, exponent) => Self::real_pow(base, exponent, column),
        }
    }

    /// Raises an integer to a non-negative integer power.
    fn integer_pow(base: i64, exponent: i64, column: usize) -> EvalResult<i64> {
        match base {
            0 | 1 => return Ok(if exponent == 0 { 1 } else { base }),
            -1 => return Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => {},
        }

        u32::try_from(exponent).ok()
                               .and_then(|exponent| base.checked_pow(exponent))
                               .ok_or(RuntimeError::Overflow { column })
    }

    fn real_pow(base: f64, exponent: f64, column: usize) -> EvalResult<Value> {
        if base == 0.0 && exponent < 0.0 {
            return Err(RuntimeError::DivisionByZero { column });
        }
        if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
            return Err(RuntimeError::DomainError { function: "pow",
                                                   column });
        }

        let result = base.powf(exponent);
        if result.is_infinite() && base.is_finite() && exponent.is_finite() {
            return Err(RuntimeError::Overflow { column });
        }
        Ok(Value::Real(result))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{environment::Environment, evaluator::binary::core::Operands, value::core::Value},
    };

    fn pow(operands: Operands) -> Result<Value, RuntimeError> {
        Environment::eval_pow(operands, 1)
    }

    #[test]
    fn trivial_bases_with_huge_exponents() {
        assert_eq!(pow(Operands::Integers(1, i64::MAX)), Ok(Value::Integer(1)));
        assert_eq!(pow(Operands::Integers(0, i64::MAX)), Ok(Value::Integer(0)));
        assert_eq!(pow(Operands::Integers(0, 0)), Ok(Value::Integer(1)));
        assert_eq!(pow(Operands::Integers(-1, 1_000_001)), Ok(Value::Integer(-1)));
    }

    #[test]
    fn integer_overflow() {
        assert_eq!(pow(Operands::Integers(2, 63)), Err(RuntimeError::Overflow { column: 1 }));
        assert_eq!(pow(Operands::Integers(-2, 63)), Ok(Value::Integer(i64::MIN)));
        assert_eq!(pow(Operands::Integers(10, 1 << 40)), Err(RuntimeError::Overflow { column: 1 }));
    }

    #[test]
    fn zero_to_negative_power() {
        assert_eq!(pow(Operands::Integers(0, -1)), Err(RuntimeError::DivisionByZero { column: 1 }));
        assert_eq!(pow(Operands::Reals(0.0, -0.5)), Err(RuntimeError::DivisionByZero { column: 1 }));
    }

    #[test]
    fn negative_base_fractional_exponent() {
        assert!(matches!(pow(Operands::Reals(-8.0, 1.0 / 3.0)),
                         Err(RuntimeError::DomainError { .. })));
        assert_eq!(pow(Operands::Reals(-2.0, 2.0)), Ok(Value::Real(4.0)));
    }

    #[test]
    fn real_overflow_and_infinity() {
        assert_eq!(pow(Operands::Reals(10.0, 400.0)), Err(RuntimeError::Overflow { column: 1 }));
        assert_eq!(pow(Operands::Reals(f64::INFINITY, 2.0)), Ok(Value::Real(f64::INFINITY)));
    }
}
