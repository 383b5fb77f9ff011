//! Classification of transport and protocol failures.
//!
//! Depends only on whether a reply arrived and, if so, its status code.
//! Diagnostic text is carried through verbatim.

use super::traits::{HttpReply, TransportFailure};
use crate::marshal::{CallError, CallResult, ProtocolErrorKind};
use tracing::warn;

/// Classify a failure status and its body
pub fn map_status(url: &str, status: u16, diagnostic: &str) -> CallError {
    let kind = ProtocolErrorKind::from_status(status);
    warn!(url, status, ?kind, "service reported failure");
    CallError::Protocol {
        kind,
        status,
        diagnostic: diagnostic.to_string(),
    }
}

/// Classify an exchange that produced no reply
pub fn map_failure(url: &str, failure: TransportFailure) -> CallError {
    match failure {
        TransportFailure::TimedOut { elapsed } => {
            warn!(url, elapsed_ms = elapsed.as_millis() as u64, "request timed out");
            CallError::Timeout {
                url: url.to_string(),
                elapsed_ms: elapsed.as_millis(),
            }
        }
        TransportFailure::NoResponse { message } => {
            warn!(url, %message, "no response from service");
            CallError::Network {
                url: url.to_string(),
                message,
            }
        }
        TransportFailure::BodyUnreadable { status, message } => {
            warn!(url, status, %message, "reply body could not be read");
            CallError::Protocol {
                kind: ProtocolErrorKind::Other,
                status,
                diagnostic: message,
            }
        }
    }
}

/// Pass successful replies through, classify everything else
pub fn map_outcome(url: &str, outcome: Result<HttpReply, TransportFailure>) -> CallResult<HttpReply> {
    match outcome {
        Ok(reply) if reply.is_success() => Ok(reply),
        Ok(reply) => Err(map_status(url, reply.status, &reply.body)),
        Err(failure) => Err(map_failure(url, failure)),
    }
}
