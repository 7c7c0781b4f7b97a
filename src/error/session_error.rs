use std::path::PathBuf;

use thiserror::Error;

use crate::error::{ErrorKind, ParseError, RuntimeError};

/// Represents all errors raised by a [`Session`](crate::session::Session).
#[derive(Debug, Error)]
pub enum SessionError {
    /// The expression could not be parsed or was rejected.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The assignment target is not a valid identifier.
    #[error("Error: Invalid variable name '{name}'.")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// The assignment target names a builtin constant or function.
    #[error("Error: Cannot assign to reserved name '{name}'.")]
    ReservedName {
        /// The rejected name.
        name: String,
    },
    /// Reading or writing a session file failed.
    #[error("Error: Cannot access session file '{}': {source}", path.display())]
    Io {
        /// The file that was accessed.
        path:   PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Session data could not be encoded or decoded.
    #[error("Error: Malformed session data: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    /// Returns the [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
            Self::InvalidName { .. } => ErrorKind::Syntax,
            Self::ReservedName { .. } => ErrorKind::Name,
            Self::Io { .. } | Self::Json(_) => ErrorKind::Persistence,
        }
    }
}
