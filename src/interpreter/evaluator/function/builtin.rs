use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Checks the result of a real function against its input.
///
/// A `nan` produced from a number that was not `nan` means the input lies
/// outside the function's domain; an infinity produced from a finite input
/// means the result overflowed.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::checked_real;
///
/// assert!(checked_real("exp", 1.0, 1f64.exp(), 1).is_ok());
/// assert!(checked_real("exp", 1000.0, 1000f64.exp(), 1).is_err());
/// assert!(checked_real("sin", f64::INFINITY, f64::INFINITY.sin(), 1).is_err());
/// ```
pub fn checked_real(function: &'static str,
                    input: f64,
                    output: f64,
                    column: usize)
                    -> EvalResult<Value> {
    if output.is_nan() && !input.is_nan() {
        return Err(RuntimeError::DomainError { function,
                                               column });
    }
    if output.is_infinite() && input.is_finite() {
        return Err(RuntimeError::Overflow { column });
    }
    Ok(Value::Real(output))
}

/// Applies a real function of one argument.
///
/// The generated functions accept exactly one numeric argument; integers are
/// promoted to reals. The result is checked with [`checked_real`].
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// let r = sin(&[x], 1).unwrap();
///
/// assert_eq!(r, Value::Real(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value], column: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, &[1], column)?;
            let x = args[0].as_real(stringify!($fname), column)?;
            checked_real(stringify!($fname), x, x.$real_fn(), column)
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(exp, exp);

/// Converts a numeric value from degrees to radians.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::radians, value::core::Value};
///
/// let r = radians(&[Value::Integer(180)], 1).unwrap();
/// assert_eq!(r, Value::Real(std::f64::consts::PI));
/// ```
pub fn radians(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("radians", args, &[1], column)?;
    Ok(Value::Real(args[0].as_real("radians", column)?.to_radians()))
}

/// Converts a numeric value from radians to degrees.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::builtin::degrees, value::core::Value};
///
/// let d = degrees(&[Value::Real(std::f64::consts::PI)], 1).unwrap();
/// assert_eq!(d, Value::Real(180.0));
/// ```
pub fn degrees(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("degrees", args, &[1], column)?;
    Ok(Value::Real(args[0].as_real("degrees", column)?.to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::{acos, asin, atan, cos, degrees, exp, sin};
    use crate::{error::RuntimeError, interpreter::value::core::Value};

    #[test]
    fn missing_argument_is_an_error() {
        assert_eq!(sin(&[], 3),
                   Err(RuntimeError::ArgumentCountMismatch { function: "sin",
                                                             expected: "exactly 1".to_string(),
                                                             found:    0,
                                                             column:   3, }));
        assert!(degrees(&[], 1).is_err());
    }

    #[test]
    fn integers_are_promoted() {
        assert_eq!(cos(&[Value::Integer(0)], 1), Ok(Value::Real(1.0)));
        assert_eq!(exp(&[Value::Integer(0)], 1), Ok(Value::Real(1.0)));
    }

    #[test]
    fn inverse_trig_domain() {
        assert_eq!(asin(&[Value::Integer(2)], 4),
                   Err(RuntimeError::DomainError { function: "asin",
                                                   column:   4, }));
        assert!(acos(&[Value::Real(-1.0)], 1).is_ok());
        assert!(atan(&[Value::Real(f64::INFINITY)], 1).is_ok());
    }

    #[test]
    fn exp_overflow() {
        assert_eq!(exp(&[Value::Integer(1000)], 2), Err(RuntimeError::Overflow { column: 2 }));
    }

    #[test]
    fn nan_passes_through() {
        assert!(matches!(cos(&[Value::Real(f64::NAN)], 1), Ok(Value::Real(r)) if r.is_nan()));
    }
}
