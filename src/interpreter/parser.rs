/// Core parsing entry points.
///
/// Tokenizes the source, guards against pathological inputs and parses
/// complete expressions and expression lists.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels.
pub mod binary;

/// Unary, power, postfix and primary parsing.
///
/// Handles prefix signs, right-associative exponentiation, calls, literals,
/// names, parenthesized expressions, tuples and lists.
pub mod unary;

/// Line-level parsing.
///
/// Distinguishes assignments from bare expressions.
pub mod statement;

/// Shared parsing helpers.
///
/// Comma-separated lists and the classification of tokens that introduce
/// disallowed constructs.
pub mod utils;

/// Tree validation.
///
/// Walks a parsed tree and enforces the depth and size limits.
pub mod validate;
