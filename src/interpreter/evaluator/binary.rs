/// Binary operator dispatch.
///
/// Evaluates both operands and routes the operation to the numeric or
/// sequence handlers.
pub mod core;

/// Addition, subtraction and multiplication of numbers.
pub mod scalar;

/// True division, floor division and modulo.
pub mod division;

/// Exponentiation.
pub mod power;

/// Concatenation and repetition of lists and tuples.
pub mod sequence;
