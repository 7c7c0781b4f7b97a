//! # reckon
//!
//! reckon is a safe arithmetic expression evaluator written in Rust.
//! It parses calculator input, rejects everything outside a small allow-list
//! of syntax, and evaluates the rest against user variables and a fixed set
//! of constants and math functions. A [`Session`](session::Session) adds
//! assignment, history and JSON persistence on top.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::SessionError, interpreter::value::core::Value, session::Session};

/// Defines the structure of parsed input.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the allow-listed expression forms and the line-level statement.
/// - Attaches source columns to every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing, evaluation and sessions.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// validating or evaluating input, or while saving and loading sessions. Every
/// error carries an [`ErrorKind`](error::ErrorKind) and, where one exists, the
/// source column it refers to.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together lexing, parsing, validation, evaluation, value
/// representations and the environment of names.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating single expressions.
pub mod interpreter;
/// Variables, history and persistence around the evaluator.
///
/// A session is the unit a user works in: it binds names, remembers what was
/// evaluated and can be saved to and restored from JSON.
pub mod session;
/// General utilities for safe numeric conversion and helpers.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` without silent data loss.
/// - Integer and real floor division and modulo.
pub mod util;

/// Evaluates a single line in a fresh session and returns its value.
///
/// The line may be an expression or an assignment; an assignment evaluates
/// to the assigned value.
///
/// # Errors
/// Returns an error if the line cannot be parsed, is rejected or fails to
/// evaluate.
///
/// # Examples
/// ```
/// use reckon::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("x = 7 // 2").unwrap(), Value::Integer(3));
///
/// // Unknown names are errors.
/// assert!(evaluate("y + 1").is_err());
/// // So is anything outside the allow-list.
/// assert!(evaluate("__import__('os')").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, SessionError> {
    Session::new().execute(source).map(|entry| entry.value)
}
