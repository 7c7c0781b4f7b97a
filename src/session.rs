use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    ast::{Expr, Statement},
    error::SessionError,
    interpreter::{
        environment::{Environment, is_global},
        lexer::is_identifier,
        parser::{
            core::parse,
            statement::parse_line,
            validate::{Limits, validate},
        },
        value::core::Value,
    },
};

/// One successfully evaluated input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The input as entered; assignments read `name = expression`.
    pub expression:    String,
    /// The value the input evaluated to.
    pub value:         Value,
    /// Whether the input bound a variable.
    pub is_assignment: bool,
}

/// The persistent state of a [`Session`]: its variables and its history.
///
/// This is the shape written by [`Session::save`] and read by
/// [`Session::load`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// User variables by name.
    #[serde(default)]
    pub variables: BTreeMap<String, Value>,
    /// Evaluated inputs, oldest first.
    #[serde(default)]
    pub history:   Vec<HistoryEntry>,
}

/// An evaluation session.
///
/// A session owns an [`Environment`] and an append-only history. Every
/// operation either succeeds completely or leaves both untouched.
///
/// # Example
/// ```
/// use reckon::{interpreter::value::core::Value, session::Session};
///
/// let mut session = Session::new();
/// session.assign("rate", "0.5").unwrap();
/// let entry = session.evaluate("rate * 10").unwrap();
///
/// assert_eq!(entry.value, Value::Real(5.0));
/// assert_eq!(session.history().len(), 2);
/// assert!(session.evaluate("rate.real").is_err());
/// assert_eq!(session.history().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    environment: Environment,
    history:     Vec<HistoryEntry>,
    limits:      Limits,
}

impl Session {
    /// Creates an empty session with the default [`Limits`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session that validates trees against `limits`.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits,
               ..Self::default() }
    }

    /// Evaluates `expression` and records it in the history.
    ///
    /// # Errors
    /// Returns a [`SessionError`] if the expression cannot be parsed, is
    /// rejected, exceeds the limits or fails to evaluate.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&mut self, expression: &str) -> Result<HistoryEntry, SessionError> {
        let tree = parse(expression).inspect_err(|e| debug!(%e, "expression rejected"))?;
        self.commit(None, &tree, expression.trim().to_string())
    }

    /// Evaluates `expression` and binds the result to `name`.
    ///
    /// Existing variables are overwritten. Names of constants and builtins
    /// are reserved.
    ///
    /// # Errors
    /// - [`SessionError::InvalidName`] if `name` is not an identifier.
    /// - [`SessionError::ReservedName`] if `name` is a global.
    /// - Any error [`Session::evaluate`] can return.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn assign(&mut self, name: &str, expression: &str) -> Result<HistoryEntry, SessionError> {
        check_name(name)?;
        let tree = parse(expression).inspect_err(|e| debug!(%e, "expression rejected"))?;
        self.commit(Some(name), &tree, format!("{name} = {}", expression.trim()))
    }

    /// Executes one input line, either `name = expression` or a bare
    /// expression.
    ///
    /// # Errors
    /// Returns the errors of [`Session::assign`] or [`Session::evaluate`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, line: &str) -> Result<HistoryEntry, SessionError> {
        match parse_line(line).inspect_err(|e| debug!(%e, "line rejected"))? {
            Statement::Assignment { name,
                                    value,
                                    value_column,
                                    .. } => {
                check_name(&name)?;
                let source = line.get(value_column.saturating_sub(1)..).unwrap_or_default();
                self.commit(Some(&name), &value, format!("{name} = {}", source.trim()))
            },
            Statement::Expression { expr, .. } => self.commit(None, &expr, line.trim().to_string()),
        }
    }

    /// Validates and evaluates `tree`, then applies the result.
    fn commit(&mut self,
              target: Option<&str>,
              tree: &Expr,
              expression: String)
              -> Result<HistoryEntry, SessionError> {
        validate(tree, self.limits).inspect_err(|e| debug!(%e, "tree exceeds limits"))?;
        let value = self.environment
                        .eval(tree)
                        .inspect_err(|e| debug!(%e, "evaluation failed"))?;

        if let Some(name) = target {
            self.environment.set(name, value.clone());
        }
        let entry = HistoryEntry { expression,
                                   value,
                                   is_assignment: target.is_some() };
        self.history.push(entry.clone());
        Ok(entry)
    }

    /// Removes all variables and the history.
    pub fn clear(&mut self) {
        self.environment.clear();
        self.history.clear();
    }

    /// The user variables, sorted by name.
    #[must_use]
    pub const fn variables(&self) -> &BTreeMap<String, Value> {
        self.environment.variables()
    }

    /// The evaluated inputs, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The limits trees are validated against.
    #[must_use]
    pub const fn limits(&self) -> Limits {
        self.limits
    }

    /// Copies the variables and the history.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot { variables: self.environment.variables().clone(),
                          history:   self.history.clone(), }
    }

    /// Replaces the variables and the history with those of `snapshot`.
    ///
    /// # Errors
    /// Fails without changing the session if a variable name is not a valid,
    /// unreserved identifier.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), SessionError> {
        for name in snapshot.variables.keys() {
            check_name(name)?;
        }

        info!(variables = snapshot.variables.len(),
              history = snapshot.history.len(),
              "session restored");
        self.environment = Environment::with_variables(snapshot.variables);
        self.history = snapshot.history;
        Ok(())
    }

    /// Encodes the session as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`SessionError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Replaces the session with the one encoded in `json`.
    ///
    /// # Errors
    /// Returns [`SessionError::Json`] for malformed data and the errors of
    /// [`Session::restore`].
    pub fn from_json(&mut self, json: &str) -> Result<(), SessionError> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)?;
        self.restore(snapshot)
    }

    /// Writes the session to `path` as JSON.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|source| SessionError::Io { path: path.to_path_buf(),
                                                                             source })?;
        debug!(path = %path.display(), "session saved");
        Ok(())
    }

    /// Replaces the session with the one saved at `path`.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] if the file cannot be read and the
    /// errors of [`Session::from_json`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SessionError::Io { path: path.to_path_buf(),
                                                                                 source })?;
        self.from_json(&json)?;
        info!(path = %path.display(), "session loaded");
        Ok(())
    }
}

/// Checks that `name` may be bound as a variable.
fn check_name(name: &str) -> Result<(), SessionError> {
    if !is_identifier(name) {
        return Err(SessionError::InvalidName { name: name.to_string() });
    }
    if is_global(name) {
        return Err(SessionError::ReservedName { name: name.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::{HistoryEntry, Session, SessionSnapshot};
    use crate::{
        error::{ErrorKind, SessionError},
        interpreter::{parser::validate::Limits, value::core::Value},
    };

    #[test]
    fn execute_routes_assignments() {
        let mut session = Session::new();
        let entry = session.execute("x = 2 + 3").unwrap();
        assert_eq!(entry,
                   HistoryEntry { expression:    "x = 2 + 3".to_string(),
                                  value:         Value::Integer(5),
                                  is_assignment: true, });
        assert_eq!(session.variables().get("x"), Some(&Value::Integer(5)));

        let entry = session.execute("  x * 2 ").unwrap();
        assert_eq!(entry.expression, "x * 2");
        assert!(!entry.is_assignment);
    }

    #[test]
    fn assignment_overwrites() {
        let mut session = Session::new();
        session.assign("x", "1").unwrap();
        session.assign("x", "x + 1").unwrap();
        assert_eq!(session.variables().get("x"), Some(&Value::Integer(2)));
        assert_eq!(session.variables().len(), 1);
        assert_eq!(session.history()[1].expression, "x = x + 1");

        session.execute("x = 11").unwrap();
        assert_eq!(session.variables().len(), 1);
    }

    #[test]
    fn assignment_history_uses_the_parsed_value() {
        let mut session = Session::new();
        let entry = session.execute("total # a = b\n=  2 + 3").unwrap();
        assert_eq!(entry.expression, "total = 2 + 3");
        assert_eq!(entry.value, Value::Integer(5));
    }

    #[test]
    fn bad_names() {
        let mut session = Session::new();
        assert!(matches!(session.assign("2x", "1"), Err(SessionError::InvalidName { .. })));
        assert!(matches!(session.assign("lambda", "1"), Err(SessionError::InvalidName { .. })));
        assert!(matches!(session.assign("pi", "3"), Err(SessionError::ReservedName { .. })));
        assert_eq!(session.execute("sqrt = 4").unwrap_err().kind(), ErrorKind::Name);
        assert!(session.history().is_empty());
    }

    #[test]
    fn failures_change_nothing() {
        let mut session = Session::new();
        session.assign("x", "1").unwrap();
        let before = session.snapshot();

        assert_eq!(session.assign("x", "1 / 0").unwrap_err().kind(), ErrorKind::Arithmetic);
        assert_eq!(session.execute("x = y").unwrap_err().kind(), ErrorKind::Name);
        assert_eq!(session.execute("x == 1").unwrap_err().kind(), ErrorKind::Rejected);
        assert_eq!(session.evaluate("x = 1").unwrap_err().kind(), ErrorKind::Rejected);
        assert_eq!(session.execute("x = (1").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn limits_are_applied() {
        let mut session = Session::with_limits(Limits { max_depth: 3,
                                                        max_nodes: 100, });
        assert!(session.evaluate("1 + 2").is_ok());
        assert_eq!(session.evaluate("((1 + 2) * 3) - 4").unwrap_err().kind(),
                   ErrorKind::Rejected);
    }

    #[test]
    fn clear_empties_everything() {
        let mut session = Session::new();
        session.execute("a = 1").unwrap();
        session.clear();
        assert!(session.variables().is_empty());
        assert!(session.history().is_empty());
        assert!(session.evaluate("a").is_err());
    }

    #[test]
    fn restore_rejects_reserved_names() {
        let mut session = Session::new();
        session.assign("keep", "1").unwrap();

        let mut variables = BTreeMap::new();
        variables.insert("e".to_string(), Value::Integer(3));
        let snapshot = SessionSnapshot { variables,
                                         history: Vec::new() };
        assert!(session.restore(snapshot).is_err());
        assert_eq!(session.variables().get("keep"), Some(&Value::Integer(1)));
    }

    #[test]
    fn json_round_trip_keeps_value_kinds() {
        let mut session = Session::new();
        session.execute("a = 3.0").unwrap();
        session.execute("b = (1, [2, nan])").unwrap();
        session.execute("f = sqrt").unwrap();

        let json = session.to_json().unwrap();
        let mut restored = Session::new();
        restored.from_json(&json).unwrap();

        assert_eq!(restored.variables().get("a"), Some(&Value::Real(3.0)));
        assert_eq!(restored.evaluate("f(16)").unwrap().value, Value::Real(4.0));
        assert_eq!(restored.history().len(), 4);
        assert_eq!(restored.variables()["b"].to_string(), "(1, [2, nan])");
    }

    #[test]
    fn malformed_json() {
        let mut session = Session::new();
        let err = session.from_json("{\"variables\": {\"x\": {\"complex\": 1}}}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Persistence);
    }
}
