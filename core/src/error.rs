//! Error types for the fetch-and-decode pipeline.
//!
//! # Design
//! Each variant is produced by exactly one stage: `InvalidUrl` by the
//! manager, `Transport`/`Server`/`Unknown` by the fetcher, `Decode` by the
//! decoder. The first stage to fail wins; nothing downstream rewrites it.

use std::fmt;

use thiserror::Error;

/// Errors returned by `NetworkManager` and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The input string could not be parsed into a fetchable URL.
    #[error("invalid URL `{input}`: {reason}")]
    InvalidUrl { input: String, reason: String },

    /// No response was obtained (DNS, refused connection, timeout, dropped body).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a 4xx or 5xx status.
    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    /// The server answered with a status that is neither 2xx nor 4xx/5xx.
    #[error("unknown error: unexpected HTTP status {status}")]
    Unknown { status: u16 },

    /// The body was not valid JSON or did not match the target shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            FetchError::Transport(_) => ErrorKind::Transport,
            FetchError::Server { .. } => ErrorKind::Server,
            FetchError::Unknown { .. } => ErrorKind::Unknown,
            FetchError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// HTTP status carried by `Server` and `Unknown`.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Server { status } | FetchError::Unknown { status } => Some(*status),
            _ => None,
        }
    }
}

/// Fieldless discriminant of `FetchError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidUrl,
    Transport,
    Server,
    Unknown,
    Decode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidUrl => "invalid-url",
            ErrorKind::Transport => "transport-error",
            ErrorKind::Server => "server-error",
            ErrorKind::Unknown => "unknown-error",
            ErrorKind::Decode => "decode-error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
