use std::collections::BTreeMap;

use crate::interpreter::{evaluator::function::core::Builtin, value::core::Value};

/// Names of the global constants and their values.
///
/// Together with the builtins these form the immutable globals shared by
/// every environment.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI),
                                        ("e", std::f64::consts::E),
                                        ("tau", std::f64::consts::TAU),
                                        ("inf", f64::INFINITY),
                                        ("nan", f64::NAN)];

/// Looks up a global constant or builtin.
///
/// # Example
/// ```
/// use reckon::interpreter::{environment::global, value::core::Value};
///
/// assert_eq!(global("tau"), Some(Value::Real(std::f64::consts::TAU)));
/// assert!(matches!(global("sqrt"), Some(Value::Function(_))));
/// assert_eq!(global("os"), None);
/// ```
#[must_use]
pub fn global(name: &str) -> Option<Value> {
    CONSTANTS.iter()
             .find(|(constant, _)| *constant == name)
             .map(|(_, value)| Value::Real(*value))
             .or_else(|| Builtin::from_name(name).map(Value::Function))
}

/// Returns `true` if `name` is a global constant or builtin.
#[must_use]
pub fn is_global(name: &str) -> bool {
    CONSTANTS.iter().any(|(constant, _)| *constant == name) || Builtin::from_name(name).is_some()
}

/// The names an expression is evaluated against.
///
/// An environment owns the user variables; the globals are static and
/// shared. Variables are kept sorted by name so listings and saved sessions
/// are deterministic.
///
/// Evaluation only ever borrows the environment immutably; variables change
/// only through [`Environment::set`] and friends, which the session calls
/// after an evaluation has succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: BTreeMap<String, Value>,
}

impl Environment {
    /// Creates an environment without variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment holding `variables`.
    #[must_use]
    pub const fn with_variables(variables: BTreeMap<String, Value>) -> Self {
        Self { variables }
    }

    /// Resolves a name: variables first, then constants, then builtins.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned().or_else(|| global(name))
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// The user variables, sorted by name.
    #[must_use]
    pub const fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }

    /// Removes every variable.
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}
