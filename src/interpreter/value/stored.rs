use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpreter::{evaluator::function::core::Builtin, value::core::Value};

/// The JSON shape of a [`Value`] in a saved session.
///
/// - integers and finite reals are JSON numbers; reals always carry a
///   fraction or an exponent, so `3.0` stays a real after a round trip,
/// - `nan`, `inf` and `-inf` are strings,
/// - lists are arrays,
/// - tuples are `{"tuple": [...]}`,
/// - builtins are `{"function": "name"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    /// A JSON integer.
    Integer(i64),
    /// A JSON number with a fraction or exponent.
    Real(f64),
    /// `"nan"`, `"inf"` or `"-inf"`.
    NonFinite(String),
    /// A JSON array.
    List(Vec<Self>),
    /// `{"tuple": [...]}`
    Tuple {
        /// The tuple's elements.
        tuple: Vec<Self>,
    },
    /// `{"function": "name"}`
    Function {
        /// Name of the builtin.
        function: String,
    },
}

/// A stored value that does not describe any [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStoredValue {
    /// A string other than `"nan"`, `"inf"` or `"-inf"`.
    #[error("unknown number '{0}'")]
    UnknownNumber(String),
    /// A function name that is not a builtin.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
}

impl StoredValue {
    /// Converts the stored form back into a runtime value.
    ///
    /// # Errors
    /// Returns [`InvalidStoredValue`] for unknown number strings or function
    /// names, anywhere in a nested sequence.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::{core::Value, stored::StoredValue};
    ///
    /// let stored = StoredValue::NonFinite("-inf".to_string());
    /// assert_eq!(stored.into_value().unwrap(), Value::Real(f64::NEG_INFINITY));
    ///
    /// let stored = StoredValue::Function { function: "eval".to_string() };
    /// assert!(stored.into_value().is_err());
    /// ```
    pub fn into_value(self) -> Result<Value, InvalidStoredValue> {
        let value = match self {
            Self::Integer(n) => Value::Integer(n),
            Self::Real(r) => Value::Real(r),
            Self::NonFinite(text) => match text.as_str() {
                "nan" => Value::Real(f64::NAN),
                "inf" => Value::Real(f64::INFINITY),
                "-inf" => Value::Real(f64::NEG_INFINITY),
                _ => return Err(InvalidStoredValue::UnknownNumber(text)),
            },
            Self::List(items) => Value::List(Rc::new(Self::into_values(items)?)),
            Self::Tuple { tuple } => Value::Tuple(Rc::new(Self::into_values(tuple)?)),
            Self::Function { function } => match Builtin::from_name(&function) {
                Some(builtin) => Value::Function(builtin),
                None => return Err(InvalidStoredValue::UnknownFunction(function)),
            },
        };
        Ok(value)
    }

    fn into_values(items: Vec<Self>) -> Result<Vec<Value>, InvalidStoredValue> {
        items.into_iter().map(Self::into_value).collect()
    }
}

impl From<&Value> for StoredValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Integer(n) => Self::Integer(*n),
            Value::Real(r) if r.is_nan() => Self::NonFinite("nan".to_string()),
            Value::Real(r) if r.is_infinite() => {
                Self::NonFinite(if *r > 0.0 { "inf" } else { "-inf" }.to_string())
            },
            Value::Real(r) => Self::Real(*r),
            Value::List(items) => Self::List(items.iter().map(Self::from).collect()),
            Value::Tuple(items) => Self::Tuple { tuple: items.iter().map(Self::from).collect() },
            Value::Function(builtin) => Self::Function { function: builtin.name().to_string() },
        }
    }
}

impl From<Value> for StoredValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::interpreter::{evaluator::function::core::Builtin, value::core::Value};

    fn to_json(value: &Value) -> String {
        serde_json::to_string(value).unwrap()
    }

    fn from_json(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn numbers_keep_their_type() {
        assert_eq!(to_json(&Value::Integer(3)), "3");
        assert_eq!(to_json(&Value::Real(3.0)), "3.0");
        assert_eq!(from_json("3"), Value::Integer(3));
        assert_eq!(from_json("3.0"), Value::Real(3.0));
        assert_eq!(from_json("1e3"), Value::Real(1000.0));
    }

    #[test]
    fn non_finite_reals_are_strings() {
        assert_eq!(to_json(&Value::Real(f64::INFINITY)), "\"inf\"");
        assert_eq!(to_json(&Value::Real(f64::NAN)), "\"nan\"");
        assert!(matches!(from_json("\"nan\""), Value::Real(r) if r.is_nan()));
        assert!(serde_json::from_str::<Value>("\"os\"").is_err());
    }

    #[test]
    fn sequences_and_functions() {
        let value = Value::Tuple(Rc::new(vec![Value::Integer(1),
                                              Value::from(vec![Value::Real(0.5)]),
                                              Value::Function(Builtin::Hypot)]));
        let json = to_json(&value);
        assert_eq!(json, r#"{"tuple":[1,[0.5],{"function":"hypot"}]}"#);
        assert_eq!(from_json(&json), value);
    }

    #[test]
    fn unknown_function_is_rejected() {
        assert!(serde_json::from_str::<Value>(r#"{"function":"__import__"}"#).is_err());
    }
}
