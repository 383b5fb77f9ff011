//! The transport contract.

use std::time::Duration;

/// A status line and body received from the service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why no reply was received
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportFailure {
    /// The deadline passed before a reply arrived
    TimedOut { elapsed: Duration },
    /// Connection failure or any other error before a status line
    NoResponse { message: String },
    /// A status line arrived but the body could not be read
    BodyUnreadable { status: u16, message: String },
}

/// Performs a single request/response exchange.
///
/// Implementations must not retry.
pub trait Transport {
    fn send(&self, url: &str, body: &str, deadline: Duration) -> Result<HttpReply, TransportFailure>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, url: &str, body: &str, deadline: Duration) -> Result<HttpReply, TransportFailure> {
        (**self).send(url, body, deadline)
    }
}
