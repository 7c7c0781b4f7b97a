use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Name not found among the variables or the globals.
    #[error("Error at column {column}: Unknown name '{name}'.")]
    UnknownName {
        /// The name that was looked up.
        name:   String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at column {column}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error at column {column}: {function}() takes {expected} argument(s) but {found} were given.")]
    ArgumentCountMismatch {
        /// The function that was called.
        function: &'static str,
        /// Human readable description of the accepted counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A function received a keyword argument it does not accept.
    #[error("Error at column {column}: {function}() got an unexpected keyword argument '{keyword}'.")]
    UnexpectedKeyword {
        /// The function that was called.
        function: &'static str,
        /// The rejected keyword.
        keyword:  String,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Tried to use a real number where an integer was required.
    #[error("Error at column {column}: {function}() only accepts integral values, found {value}.")]
    RealIsFractional {
        /// The function that was called.
        function: &'static str,
        /// The offending value as displayed.
        value:    String,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Attempted division or modulo by zero.
    #[error("Error at column {column}: Division by zero.")]
    DivisionByZero {
        /// The source column where the error occurred.
        column: usize,
    },
    /// An argument lies outside the domain of a real-valued function.
    #[error("Error at column {column}: Math domain error in {function}().")]
    DomainError {
        /// The function or operator whose domain was violated.
        function: &'static str,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error at column {column}: Numeric overflow while trying to compute result.")]
    Overflow {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A sequence operation would produce more elements than permitted.
    #[error("Error at column {column}: Sequence would exceed {limit} elements.")]
    SequenceTooLong {
        /// The maximum permitted length.
        limit:  usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Attempted to call a value that is not a function.
    #[error("Error at column {column}: '{type_name}' object is not callable.")]
    NotCallable {
        /// Type name of the value that was called.
        type_name: &'static str,
        /// The source column where the error occurred.
        column:    usize,
    },
}

impl RuntimeError {
    /// Returns the [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownName { .. } => ErrorKind::Name,
            Self::TypeError { .. }
            | Self::ArgumentCountMismatch { .. }
            | Self::UnexpectedKeyword { .. }
            | Self::RealIsFractional { .. } => ErrorKind::Type,
            Self::DivisionByZero { .. }
            | Self::DomainError { .. }
            | Self::Overflow { .. }
            | Self::SequenceTooLong { .. } => ErrorKind::Arithmetic,
            Self::NotCallable { .. } => ErrorKind::Call,
        }
    }
}
