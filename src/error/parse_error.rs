use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur during lexing, parsing or validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error at column {column}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The source text of the token encountered.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error: Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing delimiter was expected but not found.
    #[error("Error at column {column}: Expected closing '{delimiter}' but none found.")]
    ExpectedClosing {
        /// The delimiter that was expected.
        delimiter: char,
        /// The column of the matching opening delimiter.
        column:    usize,
    },
    /// An integer literal does not fit into 64 bits.
    #[error("Error at column {column}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// The same keyword argument was passed twice.
    #[error("Error at column {column}: Keyword argument '{name}' repeated.")]
    DuplicateKeyword {
        /// The repeated keyword.
        name:   String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A positional argument followed a keyword argument.
    #[error("Error at column {column}: Positional argument follows keyword argument.")]
    PositionalAfterKeyword {
        /// The source column where the error occurred.
        column: usize,
    },
    /// The expression uses a construct outside the allow-list.
    #[error("Error at column {column}: Unsupported expression element: {construct}.")]
    Rejected {
        /// The rejected construct.
        construct: Construct,
        /// The source column where the construct starts.
        column:    usize,
    },
    /// The expression nests deeper than permitted.
    #[error("Error: Expression is nested deeper than {limit} levels.")]
    TooDeep {
        /// The maximum permitted depth.
        limit: usize,
    },
    /// The expression contains more nodes than permitted.
    #[error("Error: Expression has more than {limit} elements.")]
    TooManyNodes {
        /// The maximum permitted node count.
        limit: usize,
    },
    /// The input contains more tokens than permitted.
    #[error("Error: Input has more than {limit} tokens.")]
    TooManyTokens {
        /// The maximum permitted token count.
        limit: usize,
    },
}

impl ParseError {
    /// Returns the [`ErrorKind`] of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::error::{Construct, ErrorKind, ParseError};
    ///
    /// let err = ParseError::Rejected { construct: Construct::Lambda,
    ///                                  column:    1, };
    /// assert_eq!(err.kind(), ErrorKind::Rejected);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput
            | Self::ExpectedClosing { .. }
            | Self::LiteralTooLarge { .. }
            | Self::DuplicateKeyword { .. }
            | Self::PositionalAfterKeyword { .. } => ErrorKind::Syntax,
            Self::Rejected { .. }
            | Self::TooDeep { .. }
            | Self::TooManyNodes { .. }
            | Self::TooManyTokens { .. } => ErrorKind::Rejected,
        }
    }
}

/// A syntactic construct that is recognised but never evaluated.
///
/// The display form is the only detail a rejection reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `"text"` or `'text'`.
    StringLiteral,
    /// `value.name`
    AttributeAccess,
    /// `value[index]`
    Subscript,
    /// `lambda x: ...`
    Lambda,
    /// `[x for x in xs]` and friends.
    Comprehension,
    /// `<`, `==`, `is`, `in`, ...
    Comparison,
    /// `and`, `or`, `not`
    BooleanOperator,
    /// `a if cond else b`
    ConditionalExpression,
    /// `&`, `|`, `^`, `~`, `<<`, `>>`
    BitwiseOperator,
    /// `a @ b`
    MatrixMultiplication,
    /// `=` inside an expression, `:=` and augmented assignment.
    Assignment,
    /// `*args` or `**kwargs`.
    Starred,
    /// `{...}`
    DictOrSet,
    /// Statement keywords, `;` and `:`.
    Statement,
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::StringLiteral => "string literal",
            Self::AttributeAccess => "attribute access",
            Self::Subscript => "subscript",
            Self::Lambda => "lambda",
            Self::Comprehension => "comprehension",
            Self::Comparison => "comparison",
            Self::BooleanOperator => "boolean operator",
            Self::ConditionalExpression => "conditional expression",
            Self::BitwiseOperator => "bitwise operator",
            Self::MatrixMultiplication => "matrix multiplication",
            Self::Assignment => "assignment",
            Self::Starred => "starred expression",
            Self::DictOrSet => "dict or set display",
            Self::Statement => "statement",
        };
        write!(f, "{name}")
    }
}
