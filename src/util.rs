/// Numeric conversion and Python-compatible integer/real helpers.
///
/// This module provides functions for converting between `i64` and `f64`
/// without silent data loss, and the floor division and modulo rules that the
/// evaluator's `//` and `%` operators follow.
pub mod num;
