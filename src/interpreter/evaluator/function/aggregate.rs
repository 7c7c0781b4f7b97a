use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::Operands, core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Sum of any number of numbers.
///
/// A single list or tuple argument is expanded. Integers stay integers until
/// a real is added; `sum()` is `0`.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use reckon::interpreter::{evaluator::function::aggregate::sum, value::core::Value};
///
/// let r = sum(&[Value::Integer(1), Value::Integer(2)], 1).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let list = Value::List(Rc::new(vec![Value::Integer(1), Value::Real(0.5)]));
/// assert_eq!(sum(&[list], 1).unwrap(), Value::Real(1.5));
/// ```
pub fn sum(args: &[Value], column: usize) -> EvalResult<Value> {
    numbers("sum", args, column)?.iter()
                                 .try_fold(Value::Integer(0), |total, value| {
                                     Environment::eval_binary(BinaryOperator::Add,
                                                              &total,
                                                              value,
                                                              column)
                                 })
}

/// Arithmetic mean of any number of numbers.
///
/// A single list or tuple argument is expanded. The result is always a real;
/// the mean of nothing is `nan`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::aggregate::avg, value::core::Value};
///
/// let r = avg(&[Value::Integer(1), Value::Integer(2)], 1).unwrap();
/// assert_eq!(r, Value::Real(1.5));
/// assert!(matches!(avg(&[], 1).unwrap(), Value::Real(r) if r.is_nan()));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn avg(args: &[Value], column: usize) -> EvalResult<Value> {
    let items = numbers("avg", args, column)?;
    if items.is_empty() {
        return Ok(Value::Real(f64::NAN));
    }

    let total = sum(items, column)?.as_real("avg", column)?;
    Ok(Value::Real(total / items.len() as f64))
}

/// Computes the minimum or maximum of any number of numbers.
///
/// A single list or tuple argument is expanded. The winning argument is
/// returned unchanged, so `max(1, 2.0)` is `2.0` and `min(1, 1.0)` is `1`
/// (the first of equal values wins). The operation is selected by `name`,
/// which must be `"min"` or `"max"`.
///
/// # Errors
/// `TypeError` when there is nothing to compare or an argument is not a
/// number.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::aggregate::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7)], 1).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let r = min_max("max", &[Value::Real(2.5), Value::Integer(1)], 1).unwrap();
/// assert_eq!(r, Value::Real(2.5));
///
/// assert!(min_max("max", &[], 1).is_err());
/// ```
pub fn min_max(name: &'static str, args: &[Value], column: usize) -> EvalResult<Value> {
    let items = numbers(name, args, column)?;
    let (first, rest) = items.split_first().ok_or_else(|| {
                                               RuntimeError::TypeError { details: format!("{name}() expected at least 1 number, got 0"),
                                                                         column }
                                           })?;

    let mut best = first;
    for candidate in rest {
        let better = if name == "min" {
            less_than(candidate, best)
        } else {
            less_than(best, candidate)
        };
        if better {
            best = candidate;
        }
    }
    Ok(best.clone())
}

/// Euclidean norm of any number of coordinates.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::aggregate::hypot, value::core::Value};
///
/// let r = hypot(&[Value::Integer(3), Value::Integer(4)], 1).unwrap();
/// assert_eq!(r, Value::Real(5.0));
/// assert_eq!(hypot(&[], 1).unwrap(), Value::Real(0.0));
/// ```
pub fn hypot(args: &[Value], column: usize) -> EvalResult<Value> {
    let mut norm = 0.0_f64;
    for arg in args {
        norm = norm.hypot(arg.as_real("hypot", column)?);
    }
    Ok(Value::Real(norm))
}

/// Percentage: `pct(a, b) == a * b / 100`.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::function::aggregate::pct, value::core::Value};
///
/// let r = pct(&[Value::Integer(15), Value::Integer(240)], 1).unwrap();
/// assert_eq!(r, Value::Real(36.0));
/// assert!(pct(&[Value::Integer(15)], 1).is_err());
/// ```
pub fn pct(args: &[Value], column: usize) -> EvalResult<Value> {
    check_arity("pct", args, &[2], column)?;
    let a = args[0].as_real("pct", column)?;
    let b = args[1].as_real("pct", column)?;
    Ok(Value::Real(a * b / 100.0))
}

/// Returns the numbers an aggregate works on.
///
/// A single sequence argument stands for its elements. Every element must
/// be a number.
fn numbers<'a>(function: &str, args: &'a [Value], column: usize) -> EvalResult<&'a [Value]> {
    let items = match args {
        [single] => single.as_sequence().unwrap_or(args),
        _ => args,
    };

    if let Some(bad) = items.iter().find(|item| !item.is_number()) {
        return Err(RuntimeError::TypeError { details: format!("{function}() expects numbers, not '{}'",
                                                              bad.type_name()),
                                             column });
    }
    Ok(items)
}

/// Numeric `<`; any comparison involving `nan` is false.
fn less_than(left: &Value, right: &Value) -> bool {
    match Operands::promote(left, right) {
        Some(Operands::Integers(a, b)) => a < b,
        Some(Operands::Reals(a, b)) => a < b,
        None => false,
    }
}
