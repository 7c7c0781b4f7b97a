use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Greatest common divisor of any number of integers.
///
/// The result is never negative. `gcd()` is `0`, the identity of the
/// operation.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::number_theory::gcd, value::core::Value};
///
/// let r = gcd(&[Value::Integer(12), Value::Integer(-18), Value::Integer(8)], 1).unwrap();
/// assert_eq!(r, Value::Integer(2));
/// assert_eq!(gcd(&[], 1).unwrap(), Value::Integer(0));
/// ```
pub fn gcd(args: &[Value], column: usize) -> EvalResult<Value> {
    let mut result = 0u64;
    for arg in args {
        result = gcd_u64(result, arg.as_integral("gcd", column)?.unsigned_abs());
    }
    to_integer(result, column)
}

/// Least common multiple of any number of integers.
///
/// The result is never negative; it is `0` if any argument is `0`. `lcm()` is
/// `1`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::number_theory::lcm, value::core::Value};
///
/// let r = lcm(&[Value::Integer(4), Value::Integer(6)], 1).unwrap();
/// assert_eq!(r, Value::Integer(12));
/// assert_eq!(lcm(&[], 1).unwrap(), Value::Integer(1));
/// ```
pub fn lcm(args: &[Value], column: usize) -> EvalResult<Value> {
    let mut result = 1u64;
    for arg in args {
        let n = arg.as_integral("lcm", column)?.unsigned_abs();
        if n == 0 || result == 0 {
            result = 0;
            continue;
        }
        result = (result / gcd_u64(result, n)).checked_mul(n)
                                              .ok_or(RuntimeError::Overflow { column })?;
    }
    to_integer(result, column)
}

/// Euclid's algorithm.
const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn to_integer(value: u64, column: usize) -> EvalResult<Value> {
    i64::try_from(value).map(Value::Integer)
                        .map_err(|_| RuntimeError::Overflow { column })
}

#[cfg(test)]
mod tests {
    use super::{gcd, lcm};
    use crate::{error::RuntimeError, interpreter::value::core::Value};

    #[test]
    fn gcd_of_min_overflows() {
        assert_eq!(gcd(&[Value::Integer(i64::MIN)], 1), Err(RuntimeError::Overflow { column: 1 }));
        assert_eq!(gcd(&[Value::Integer(i64::MIN), Value::Integer(6)], 1),
                   Ok(Value::Integer(2)));
    }

    #[test]
    fn lcm_with_zero() {
        assert_eq!(lcm(&[Value::Integer(0), Value::Integer(5)], 1), Ok(Value::Integer(0)));
    }

    #[test]
    fn lcm_overflow() {
        assert!(lcm(&[Value::Integer(i64::MAX), Value::Integer(2)], 1).is_err());
    }

    #[test]
    fn fractional_arguments_are_rejected() {
        assert!(matches!(gcd(&[Value::Real(2.5)], 1),
                         Err(RuntimeError::RealIsFractional { .. })));
    }
}
