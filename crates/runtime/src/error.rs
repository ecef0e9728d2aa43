//! Error types surfaced by the runtime.
//!
//! Wraps graph validation failures and protocol failures so the binary can
//! bubble them up with consistent context.
use std::io;

use rift_core::{ErrorSeverity, GraphError, RiftError, ZoneId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures while reading or writing the match protocol.
///
/// Every variant ends the match: the engine cannot resynchronise with a
/// stream it failed to parse.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("protocol stream failed")]
    Io(#[from] io::Error),

    #[error("input ended while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid {expected}: {token:?}")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    #[error("{field} = {value} is out of range")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("zone {zone} owned by unknown player {owner}")]
    InvalidOwner { zone: ZoneId, owner: i32 },
}

impl RiftError for ProtocolError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ProtocolError::Io(_) => "PROTOCOL_IO",
            ProtocolError::UnexpectedEof { .. } => "PROTOCOL_UNEXPECTED_EOF",
            ProtocolError::InvalidToken { .. } => "PROTOCOL_INVALID_TOKEN",
            ProtocolError::OutOfRange { .. } => "PROTOCOL_OUT_OF_RANGE",
            ProtocolError::InvalidOwner { .. } => "PROTOCOL_INVALID_OWNER",
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("runtime requires a match setup before building")]
    MissingSetup,
}

impl RiftError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Graph(err) => err.severity(),
            RuntimeError::Protocol(err) => err.severity(),
            RuntimeError::MissingSetup => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Graph(err) => err.error_code(),
            RuntimeError::Protocol(err) => err.error_code(),
            RuntimeError::MissingSetup => "RUNTIME_MISSING_SETUP",
        }
    }
}
