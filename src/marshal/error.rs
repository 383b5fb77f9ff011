//! Error types for marshaling and calls
//!
//! One closed taxonomy covers encoding, decoding, transport and protocol
//! failures. Every variant carries enough context to reproduce the failure.

use crate::types::{Shape, TypeTag};
use serde::Deserialize;
use thiserror::Error;

/// HTTP status classes the service reports failures with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolErrorKind {
    /// 404: unknown archive or function
    NotFound,
    /// 400: malformed request
    BadRequest,
    /// 5xx
    ServerFault,
    Other,
}

impl ProtocolErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ProtocolErrorKind::NotFound,
            400 => ProtocolErrorKind::BadRequest,
            500..=599 => ProtocolErrorKind::ServerFault,
            _ => ProtocolErrorKind::Other,
        }
    }
}

/// Errors that can occur while encoding, calling, or decoding
#[derive(Error, Debug)]
pub enum CallError {
    /// The type hint cannot apply to the value's native kind
    #[error("invalid type: {tag} cannot represent a {kind} value")]
    InvalidType { kind: String, tag: TypeTag },

    /// A declared shape disagrees with the supplied data.
    ///
    /// `expected` saturates at `usize::MAX` when the shape overflows.
    #[error("shape mismatch: shape {shape} declares {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: Shape,
        expected: usize,
        actual: usize,
    },

    #[error("invalid output count {requested}: at least one output is required")]
    InvalidArity { requested: usize },

    #[error("empty payload in {tag} value of shape {shape}")]
    EmptyPayload { tag: TypeTag, shape: Shape },

    /// Response supplied fewer outputs than requested
    #[error("missing output {index}: requested {requested}, response has {available}")]
    MissingOutput {
        index: usize,
        requested: usize,
        available: usize,
    },

    /// No response was received
    #[error("network error calling {url}: {message}")]
    Network { url: String, message: String },

    #[error("request to {url} timed out after {elapsed_ms} ms")]
    Timeout { url: String, elapsed_ms: u128 },

    /// The service answered with a failure status or an undecodable body
    #[error("protocol error ({kind:?}, status {status}): {diagnostic}")]
    Protocol {
        kind: ProtocolErrorKind,
        status: u16,
        diagnostic: String,
    },
}

/// Result type alias for marshaling and call operations
pub type CallResult<T> = Result<T, CallError>;

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl CallError {
    /// Errors raised by local encoding or decoding rather than the transport
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CallError::InvalidType { .. }
                | CallError::ShapeMismatch { .. }
                | CallError::InvalidArity { .. }
                | CallError::EmptyPayload { .. }
                | CallError::MissingOutput { .. }
        )
    }

    pub fn protocol_kind(&self) -> Option<ProtocolErrorKind> {
        match self {
            CallError::Protocol { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Raw diagnostic text of a protocol failure, unmodified
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            CallError::Protocol { diagnostic, .. } => Some(diagnostic),
            _ => None,
        }
    }

    /// Message from a structured `{"error": {"message": ...}}` body, if any
    pub fn server_message(&self) -> Option<String> {
        let body: ErrorBody = serde_json::from_str(self.diagnostic()?).ok()?;
        body.error.message
    }
}
