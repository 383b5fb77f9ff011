//! Function invocation: encode, send once, classify, decode.

use super::error_mapper::map_outcome;
use super::traits::Transport;
use crate::constants::DEFAULT_TIMEOUT_MS;
use crate::marshal::{Argument, CallResult, decode_outputs, encode_request, parse_response};
use crate::types::{NativeValue, OutputFormat, Request};
use std::time::Duration;
use tracing::{debug, trace};

/// Calls remote functions through a [`Transport`].
///
/// Holds no per-call state, so one client can serve concurrent calls if the
/// transport allows it.
#[derive(Clone, Debug)]
pub struct FunctionClient<T: Transport> {
    transport: T,
    timeout: Duration,
    output_format: OutputFormat,
}

impl<T: Transport> FunctionClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invoke the function at `url` with the client's default deadline
    pub fn call(
        &self,
        url: &str,
        output_count: usize,
        args: &[Argument],
    ) -> CallResult<Vec<NativeValue>> {
        self.call_with_timeout(url, output_count, args, self.timeout)
    }

    /// Invoke the function at `url`.
    ///
    /// Local encoding errors are returned before anything is sent. The
    /// request is sent exactly once.
    pub fn call_with_timeout(
        &self,
        url: &str,
        output_count: usize,
        args: &[Argument],
        timeout: Duration,
    ) -> CallResult<Vec<NativeValue>> {
        let request = encode_request(output_count, args)?.with_output_format(self.output_format);
        let body = request_body(&request);

        debug!(url, nargout = output_count, argc = args.len(), "calling function");
        trace!(%body, "request body");

        let reply = map_outcome(url, self.transport.send(url, &body, timeout))?;
        trace!(body = %reply.body, "response body");

        let response = parse_response(reply.status, &reply.body)?;
        decode_outputs(&response, output_count)
    }
}

/// Serialize a request body
pub fn request_body(request: &Request) -> String {
    request.to_json().to_string()
}
