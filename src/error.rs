/// Parsing errors.
///
/// Defines all error types that can occur during lexing, parsing and
/// validation of an expression. This covers malformed input (syntax errors),
/// constructs outside the allow-list (rejected syntax) and inputs exceeding
/// the configured size limits.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown names, wrong argument types, division by zero, math domain errors
/// and calls of values that are not functions.
pub mod runtime_error;
/// Session errors.
///
/// Errors raised by the assignment and persistence layer around the
/// evaluator, wrapping parse and runtime errors.
pub mod session_error;

pub use parse_error::{Construct, ParseError};
pub use runtime_error::RuntimeError;
pub use session_error::SessionError;

/// Coarse classification of every error the crate can produce.
///
/// Callers use the kind to decide how to report a failure without matching
/// on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed expression text.
    Syntax,
    /// Expression uses a construct outside the allow-list or exceeds a limit.
    Rejected,
    /// Identifier not found, or not usable as a variable name.
    Name,
    /// Argument of the wrong shape or type.
    Type,
    /// Division by zero, domain error or overflow.
    Arithmetic,
    /// Attempted to call a value that is not a function.
    Call,
    /// Reading, writing or decoding a saved session failed.
    Persistence,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Syntax => "SyntaxError",
            Self::Rejected => "RejectedSyntax",
            Self::Name => "NameError",
            Self::Type => "TypeError",
            Self::Arithmetic => "ArithmeticError",
            Self::Call => "CallError",
            Self::Persistence => "PersistenceError",
        };
        write!(f, "{name}")
    }
}
