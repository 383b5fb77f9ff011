//! Blocking HTTP transport.

use super::traits::{HttpReply, Transport, TransportFailure};
use crate::constants::JSON_CONTENT_TYPE;
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};
use tracing::trace;

/// POSTs JSON request bodies with a per-request deadline
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    fn failure(err: reqwest::Error, start: Instant) -> TransportFailure {
        if err.is_timeout() {
            TransportFailure::TimedOut {
                elapsed: start.elapsed(),
            }
        } else {
            TransportFailure::NoResponse {
                message: err.to_string(),
            }
        }
    }

    fn body_failure(err: reqwest::Error, status: u16, start: Instant) -> TransportFailure {
        if err.is_timeout() {
            TransportFailure::TimedOut {
                elapsed: start.elapsed(),
            }
        } else {
            TransportFailure::BodyUnreadable {
                status,
                message: err.to_string(),
            }
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: &str, body: &str, deadline: Duration) -> Result<HttpReply, TransportFailure> {
        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.to_string())
            .timeout(deadline)
            .send()
            .map_err(|e| Self::failure(e, start))?;

        let status = response.status().as_u16();
        let text = response.text().map_err(|e| Self::body_failure(e, status, start))?;
        trace!(url, status, elapsed = ?start.elapsed(), "reply received");

        Ok(HttpReply { status, body: text })
    }
}
