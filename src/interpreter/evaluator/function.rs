/// Builtin function table and call evaluation.
///
/// Declares the closed set of builtins, their arities and the dispatch from a
/// call expression to an implementation.
pub mod core;

/// Real-valued functions of one argument.
///
/// Trigonometric functions, `exp` and the angle conversions.
pub mod builtin;

/// Logarithm function implementations.
///
/// Natural logarithm with an optional base, and the base-10 logarithm.
pub mod log;

/// The `sqrt` (square root) function implementation.
pub mod sqrt;

/// `factorial`, `comb` and `perm`.
pub mod factorial;

/// `gcd` and `lcm` over any number of integers.
pub mod number_theory;

/// Variadic aggregates.
///
/// `sum`, `avg`, `min`, `max`, `hypot` and `pct`.
pub mod aggregate;
