use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Computes `n!` for a non-negative integral value.
///
/// Integral reals such as `5.0` are accepted; the result is always an
/// integer.
///
/// # Errors
/// - `DomainError` for negative input.
/// - `RealIsFractional` for reals with a fractional part.
/// - `Overflow` if the result does not fit into an `i64`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::factorial::factorial, value::core::Value};
///
/// assert_eq!(factorial(&[Value::Integer(5)], 1).unwrap(), Value::Integer(120));
/// assert_eq!(factorial(&[Value::Real(5.0)], 1).unwrap(), Value::Integer(120));
/// assert!(factorial(&[Value::Real(5.5)], 1).is_err());
/// ```
pub fn factorial(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("factorial", args, &[1], column)?;
    let n = non_negative("factorial", &args[0], column)?;
    Ok(Value::Integer(falling_factorial(n, n, column)?))
}

/// Number of ways to choose `k` items from `n` without order.
///
/// Returns `0` when `k > n`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::factorial::comb, value::core::Value};
///
/// let r = comb(&[Value::Integer(5), Value::Integer(2)], 1).unwrap();
/// assert_eq!(r, Value::Integer(10));
///
/// let r = comb(&[Value::Integer(2), Value::Integer(5)], 1).unwrap();
/// assert_eq!(r, Value::Integer(0));
/// ```
pub fn comb(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("comb", args, &[2], column)?;
    let n = non_negative("comb", &args[0], column)?;
    let k = non_negative("comb", &args[1], column)?;

    if k > n {
        return Ok(Value::Integer(0));
    }

    let k = std::cmp::min(k, n - k);
    let mut result = 1i128;
    for i in 0..k {
        result = result * i128::from(n - i) / i128::from(i + 1);
        if result > i128::from(i64::MAX) {
            return Err(RuntimeError::Overflow { column });
        }
    }

    i64::try_from(result).map(Value::Integer)
                         .map_err(|_| RuntimeError::Overflow { column })
}

/// Number of ways to choose `k` items from `n` with order.
///
/// With one argument `k` defaults to `n`, so `perm(n)` is `n!`. Returns `0`
/// when `k > n`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::factorial::perm, value::core::Value};
///
/// assert_eq!(perm(&[Value::Integer(5)], 1).unwrap(), Value::Integer(120));
/// assert_eq!(perm(&[Value::Integer(5), Value::Integer(2)], 1).unwrap(),
///            Value::Integer(20));
/// ```
pub fn perm(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("perm", args, &[1, 2], column)?;
    let n = non_negative("perm", &args[0], column)?;
    let k = match args.get(1) {
        Some(k) => non_negative("perm", k, column)?,
        None => n,
    };

    if k > n {
        return Ok(Value::Integer(0));
    }
    Ok(Value::Integer(falling_factorial(n, k, column)?))
}

/// Converts an argument to a non-negative integer.
fn non_negative(function: &'static str, value: &Value, column: usize) -> EvalResult<i64> {
    let n = value.as_integral(function, column)?;
    if n < 0 {
        return Err(RuntimeError::DomainError { function,
                                               column });
    }
    Ok(n)
}

/// Computes `n * (n - 1) * ... * (n - k + 1)` with overflow checking.
///
/// `k` must not exceed `n`. The product overflows after a few dozen factors
/// at most, so the loop is short for any input.
fn falling_factorial(n: i64, k: i64, column: usize) -> EvalResult<i64> {
    let mut result = 1i64;
    for i in 0..k {
        result = result.checked_mul(n - i)
                       .ok_or(RuntimeError::Overflow { column })?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{comb, factorial, perm};
    use crate::{error::RuntimeError, interpreter::value::core::Value};

    #[test]
    fn factorial_limits() {
        assert_eq!(factorial(&[Value::Integer(0)], 1), Ok(Value::Integer(1)));
        assert_eq!(factorial(&[Value::Integer(20)], 1),
                   Ok(Value::Integer(2_432_902_008_176_640_000)));
        assert_eq!(factorial(&[Value::Integer(21)], 1), Err(RuntimeError::Overflow { column: 1 }));
        assert_eq!(factorial(&[Value::Integer(-1)], 1),
                   Err(RuntimeError::DomainError { function: "factorial",
                                                   column:   1, }));
    }

    #[test]
    fn huge_factorial_fails_fast() {
        assert!(factorial(&[Value::Integer(i64::MAX)], 1).is_err());
    }

    #[test]
    fn comb_symmetry_and_size() {
        assert_eq!(comb(&[Value::Integer(52), Value::Integer(5)], 1),
                   Ok(Value::Integer(2_598_960)));
        assert_eq!(comb(&[Value::Integer(52), Value::Integer(47)], 1),
                   Ok(Value::Integer(2_598_960)));
        assert_eq!(comb(&[Value::Integer(66), Value::Integer(33)], 1),
                   Ok(Value::Integer(7_219_428_434_016_265_740)));
        assert!(comb(&[Value::Integer(70), Value::Integer(35)], 1).is_err());
    }

    #[test]
    fn wrong_argument_counts_do_not_panic() {
        assert!(matches!(factorial(&[], 1), Err(RuntimeError::ArgumentCountMismatch { .. })));
        assert!(matches!(comb(&[Value::Integer(5)], 1),
                         Err(RuntimeError::ArgumentCountMismatch { found: 1, .. })));
        assert!(perm(&[], 1).is_err());
    }

    #[test]
    fn perm_rejects_negative_k() {
        assert!(matches!(perm(&[Value::Integer(5), Value::Integer(-1)], 1),
                         Err(RuntimeError::DomainError { .. })));
    }
}
