use std::fs;

use pretty_assertions::assert_eq;
use reckon::{
    error::{ErrorKind, SessionError},
    interpreter::value::core::Value,
    session::Session,
};
use tempfile::tempdir;

fn session_with(lines: &[&str]) -> Session {
    let mut session = Session::new();
    for line in lines {
        session.execute(line)
               .unwrap_or_else(|e| panic!("`{line}` failed: {e}"));
    }
    session
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = session_with(&["a = 1", "b = 2.0", "c = (a, [b, inf])", "f = hypot", "a + b"]);
    session.save(&path).unwrap();

    let mut loaded = Session::new();
    loaded.load(&path).unwrap();

    assert_eq!(loaded.snapshot(), session.snapshot());
    assert_eq!(loaded.variables()["b"], Value::Real(2.0));
    assert_eq!(loaded.execute("f(3, 4)").unwrap().value, Value::Real(5.0));
}

#[test]
fn saved_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    session_with(&["t = (1, nan)", "r = 3.0"]).save(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(json["variables"]["t"], serde_json::json!({ "tuple": [1, "nan"] }));
    assert_eq!(json["variables"]["r"], serde_json::json!(3.0));
    assert_eq!(json["history"][1],
               serde_json::json!({ "expression": "r = 3.0", "value": 3.0, "is_assignment": true }));
}

#[test]
fn load_replaces_instead_of_merging() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    session_with(&["a = 1"]).save(&path).unwrap();

    let mut session = session_with(&["b = 2", "b * 2"]);
    session.load(&path).unwrap();

    assert_eq!(session.variables().keys().collect::<Vec<_>>(), ["a"]);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn failed_load_changes_nothing() {
    let dir = tempdir().unwrap();
    let mut session = session_with(&["keep = 5"]);
    let before = session.snapshot();

    let missing = session.load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, SessionError::Io { .. }));
    assert_eq!(missing.kind(), ErrorKind::Persistence);

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "not json").unwrap();
    assert_eq!(session.load(&garbage).unwrap_err().kind(), ErrorKind::Persistence);

    let reserved = dir.path().join("reserved.json");
    fs::write(&reserved, r#"{"variables": {"pi": 3}, "history": []}"#).unwrap();
    assert!(matches!(session.load(&reserved), Err(SessionError::ReservedName { .. })));

    let unknown = dir.path().join("unknown.json");
    fs::write(&unknown, r#"{"variables": {"g": {"function": "eval"}}}"#).unwrap();
    assert_eq!(session.load(&unknown).unwrap_err().kind(), ErrorKind::Persistence);

    assert_eq!(session.snapshot(), before);
}

#[test]
fn failed_lines_leave_no_trace() {
    let mut session = session_with(&["x = 10"]);
    let before = session.snapshot();

    for line in ["x = x / 0", "x = y", "x = x.real", "1 +", "pi = 3", "x = factorial(-1)"] {
        assert!(session.execute(line).is_err(), "`{line}` should fail");
    }

    assert_eq!(session.snapshot(), before);
}

#[test]
fn history_records_every_success() {
    let session = session_with(&["x = 2 + 3", "x * 2", "y = x ** 2"]);
    let history: Vec<_> = session.history()
                                 .iter()
                                 .map(|entry| (entry.expression.as_str(), entry.value.to_string(), entry.is_assignment))
                                 .collect();

    assert_eq!(history,
               vec![("x = 2 + 3", "5".to_string(), true),
                    ("x * 2", "10".to_string(), false),
                    ("y = x ** 2", "25".to_string(), true)]);
}
