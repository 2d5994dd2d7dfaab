//! Error types for model fetching.
//!
//! Every failure is reported as one of five kinds. The variant carries the offending
//! identifier, path or resource name, plus the underlying cause when there is one.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed cause attached to transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classified failure kind surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    SecurityViolation,
    TransportFailure,
    ContextDestroyed,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "INVALID_INPUT"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::SecurityViolation => write!(f, "SECURITY_VIOLATION"),
            Self::TransportFailure => write!(f, "TRANSPORT_FAILURE"),
            Self::ContextDestroyed => write!(f, "CONTEXT_DESTROYED"),
        }
    }
}

/// Model fetch error.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed identifier, or a file too large to buffer
    #[error("Invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// Local file or bundled resource could not be found or opened
    #[error("Not found: {target}")]
    NotFound {
        target: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Local file outside the extension allowlist
    #[error("Only .{allowed} files are allowed: {}", .path.display())]
    SecurityViolation { path: PathBuf, allowed: String },

    /// Request failed, body missing, or a read came up short
    #[error("Transport failure for {target}: {reason}")]
    TransportFailure {
        target: String,
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Host context was torn down before the fetch started
    #[error("Host context has already been destroyed")]
    ContextDestroyed,
}

impl Error {
    /// The classified kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::SecurityViolation { .. } => ErrorKind::SecurityViolation,
            Self::TransportFailure { .. } => ErrorKind::TransportFailure,
            Self::ContextDestroyed => ErrorKind::ContextDestroyed,
        }
    }

    pub(crate) fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(target: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::NotFound {
            target: target.into(),
            source,
        }
    }

    pub(crate) fn transport(
        target: impl Into<String>,
        reason: impl Into<String>,
        source: Option<BoxError>,
    ) -> Self {
        Self::TransportFailure {
            target: target.into(),
            reason: reason.into(),
            source,
        }
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;
