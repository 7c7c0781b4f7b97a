use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Builtin},
        value::stored::{InvalidStoredValue, StoredValue},
    },
    util::num::{f64_to_i64_exact, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Sequences are reference counted so that copying a variable into an
/// expression is cheap; they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredValue", into = "StoredValue")]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// An immutable, ordered sequence: `(1, 2)`.
    Tuple(Rc<Vec<Self>>),
    /// An ordered sequence: `[1, 2]`.
    List(Rc<Vec<Self>>),
    /// A builtin function, obtained by looking up its name.
    Function(Builtin),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<Builtin> for Value {
    fn from(b: Builtin) -> Self {
        Self::Function(b)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns a type error if it is not
    /// a number.
    ///
    /// Integers are promoted to the nearest real.
    ///
    /// # Parameters
    /// - `function`: Name of the operation, used in the error message.
    /// - `column`: Source column for error reporting.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real("sqrt", 1).unwrap(), 10.0);
    /// assert!(Value::List(Rc::new(Vec::new())).as_real("sqrt", 1).is_err());
    /// ```
    pub fn as_real(&self, function: &str, column: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(self.expected_number(function, column)),
        }
    }

    /// Converts the value to an `i64`, accepting integral reals.
    ///
    /// - `Value::Integer` is returned directly.
    /// - `Value::Real` is converted if it is finite, integral and in range.
    ///
    /// # Errors
    /// - `RealIsFractional` for reals with a fractional part.
    /// - `Overflow` for integral reals outside the `i64` range.
    /// - `DomainError` for `nan` and the infinities.
    /// - `TypeError` for non-numeric values.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Real(10.0).as_integral("factorial", 1).unwrap(), 10);
    /// assert!(Value::Real(1.5).as_integral("factorial", 1).is_err());
    /// ```
    pub fn as_integral(&self, function: &'static str, column: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) if !r.is_finite() => Err(RuntimeError::DomainError { function,
                                                                               column }),
            Self::Real(r) if r.fract() != 0.0 => {
                Err(RuntimeError::RealIsFractional { function,
                                                     value: self.to_string(),
                                                     column })
            },
            Self::Real(r) => f64_to_i64_exact(*r).ok_or(RuntimeError::Overflow { column }),
            _ => Err(self.expected_number(function, column)),
        }
    }

    /// Returns the elements of a tuple or list, or `None` for other values.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Tuple(items) | Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` for integers and reals.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Returns the name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "int");
    /// assert_eq!(Value::Real(1.0).type_name(), "float");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Tuple(_) => "tuple",
            Self::List(_) => "list",
            Self::Function(_) => "builtin_function_or_method",
        }
    }

    fn expected_number(&self, function: &str, column: usize) -> RuntimeError {
        RuntimeError::TypeError { details: format!("{function}() expects a number, not '{}'",
                                                   self.type_name()),
                                  column }
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            },
            Self::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            },
            Self::Function(builtin) => write!(f, "<built-in function {}>", builtin.name()),
        }
    }
}

fn write_items(f: &mut std::fmt::Formatter<'_>, items: &[Value]) -> std::fmt::Result {
    for (index, value) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

/// Formats a real the way Python's `repr` does.
///
/// The shortest digit string that round-trips is used. Decimal exponents
/// from -4 up to 15 are written positionally with at least one fractional
/// digit; anything else uses scientific notation with a signed, two-digit
/// exponent.
///
/// # Example
/// ```
/// use reckon::interpreter::value::core::format_real;
///
/// assert_eq!(format_real(3.0), "3.0");
/// assert_eq!(format_real(0.1), "0.1");
/// assert_eq!(format_real(1e20), "1e+20");
/// assert_eq!(format_real(1.5e-7), "1.5e-07");
/// assert_eq!(format_real(f64::NAN), "nan");
/// assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = format!("{value}");
        if positional.contains('.') {
            positional
        } else {
            format!("{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

impl TryFrom<StoredValue> for Value {
    type Error = InvalidStoredValue;

    fn try_from(stored: StoredValue) -> Result<Self, Self::Error> {
        stored.into_value()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::{Value, format_real};
    use crate::{error::RuntimeError, interpreter::evaluator::function::core::Builtin};

    #[test]
    fn displays_like_python() {
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Real(2.5).to_string(), "2.5");
        assert_eq!(Value::Tuple(Rc::new(vec![Value::Integer(1)])).to_string(), "(1,)");
        assert_eq!(Value::Tuple(Rc::new(vec![])).to_string(), "()");
        assert_eq!(Value::from(vec![Value::Integer(1), Value::Real(2.0)]).to_string(),
                   "[1, 2.0]");
        assert_eq!(Value::Function(Builtin::Sin).to_string(), "<built-in function sin>");
    }

    #[test]
    fn real_formatting_boundaries() {
        assert_eq!(format_real(1e15), "1000000000000000.0");
        assert_eq!(format_real(1e16), "1e+16");
        assert_eq!(format_real(0.0001), "0.0001");
        assert_eq!(format_real(0.00001), "1e-05");
        assert_eq!(format_real(-0.0), "-0.0");
        assert_eq!(format_real(123.456), "123.456");
    }

    #[test]
    fn integral_conversion() {
        assert_eq!(Value::Real(5.0).as_integral("factorial", 1), Ok(5));
        assert!(matches!(Value::Real(5.5).as_integral("factorial", 3),
                         Err(RuntimeError::RealIsFractional { column: 3, .. })));
        assert!(matches!(Value::Real(f64::INFINITY).as_integral("factorial", 1),
                         Err(RuntimeError::DomainError { .. })));
        assert!(matches!(Value::List(Rc::new(vec![])).as_integral("factorial", 1),
                         Err(RuntimeError::TypeError { .. })));
    }
}
