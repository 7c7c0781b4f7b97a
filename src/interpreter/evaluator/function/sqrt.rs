use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Computes the real square root of a numeric value.
///
/// Integers are promoted to reals. Negative input is outside the domain;
/// `-0.0` is not negative and yields `-0.0`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::sqrt::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Integer(9)], 1).unwrap(), Value::Real(3.0));
/// assert!(sqrt(&[Value::Integer(-1)], 1).is_err());
/// assert!(sqrt(&[], 1).is_err());
/// ```
pub fn sqrt(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("sqrt", args, &[1], column)?;
    let x = args[0].as_real("sqrt", column)?;
    if x < 0.0 {
        return Err(RuntimeError::DomainError { function: "sqrt",
                                               column });
    }
    Ok(Value::Real(x.sqrt()))
}
