/// Binary operator evaluation logic.
///
/// Handles arithmetic on numbers and the sequence operations on lists and
/// tuples.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix `+` and `-` operators.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the main evaluation entry point and the evaluator's result type.
pub mod core;

/// Utility functions for evaluation.
///
/// Literals, name lookup and sequence displays.
pub mod utils;

/// Function evaluation.
///
/// Handles builtin lookup, argument checking and the builtin implementations.
pub mod function;
