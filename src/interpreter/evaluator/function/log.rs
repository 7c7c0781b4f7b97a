use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Computes the natural logarithm, or the logarithm to a given base.
///
/// Accepts one or two arguments: `value` and an optional `base`.
/// With a base the result is `ln(value) / ln(base)`.
///
/// # Errors
/// - `DomainError` if `value` or `base` is not positive.
/// - `DivisionByZero` if `base` is `1`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let r = log("log", &[Value::Integer(8), Value::Integer(2)], 1).unwrap();
/// assert_eq!(r, Value::Real(3.0));
///
/// let r = log("ln", &[Value::Real(std::f64::consts::E)], 1).unwrap();
/// assert_eq!(r, Value::Real(1.0));
/// ```
pub fn log(function: &'static str, args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity(function, args, &[1, 2], column)?;
    let value = positive(function, &args[0], column)?.ln();

    let Some(base) = args.get(1) else {
        return Ok(Value::Real(value));
    };
    let base = positive(function, base, column)?.ln();
    if base == 0.0 {
        return Err(RuntimeError::DivisionByZero { column });
    }

    Ok(Value::Real(value / base))
}

/// Computes the base-10 logarithm.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::log::log10, value::core::Value};
///
/// assert_eq!(log10(&[Value::Integer(100)], 1).unwrap(), Value::Real(2.0));
/// assert!(log10(&[Value::Integer(0)], 1).is_err());
/// ```
pub fn log10(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("log10", args, &[1], column)?;
    Ok(Value::Real(positive("log10", &args[0], column)?.log10()))
}

/// Converts a logarithm argument to a real, rejecting zero and negatives.
///
/// `nan` is let through and propagates into the result.
fn positive(function: &'static str, value: &Value, column: usize) -> EvalResult<f64> {
    let x = value.as_real(function, column)?;
    if x <= 0.0 {
        return Err(RuntimeError::DomainError { function, column });
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::log;
    use crate::{error::RuntimeError, interpreter::value::core::Value};

    #[test]
    fn base_one_divides_by_zero() {
        assert_eq!(log("log", &[Value::Integer(5), Value::Integer(1)], 3),
                   Err(RuntimeError::DivisionByZero { column: 3 }));
    }

    #[test]
    fn non_positive_arguments() {
        assert!(matches!(log("ln", &[Value::Integer(-1)], 1),
                         Err(RuntimeError::DomainError { function: "ln", .. })));
        assert!(matches!(log("log", &[Value::Integer(8), Value::Integer(0)], 1),
                         Err(RuntimeError::DomainError { .. })));
    }

    #[test]
    fn argument_counts() {
        assert!(matches!(log("log", &[], 1),
                         Err(RuntimeError::ArgumentCountMismatch { ref expected, .. }) if expected == "1 or 2"));
        let three = [Value::Integer(1), Value::Integer(2), Value::Integer(3)];
        assert!(log("ln", &three, 1).is_err());
    }

    #[test]
    fn infinity() {
        assert_eq!(log("log", &[Value::Real(f64::INFINITY)], 1),
                   Ok(Value::Real(f64::INFINITY)));
    }
}
