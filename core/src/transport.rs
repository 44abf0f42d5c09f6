//! The I/O seam between `JobsClient` and the network.
//!
//! # Design
//! `Transport` executes one `HttpRequest` and hands back a fully-read
//! `HttpResponse`. Non-2xx statuses are data, not errors; only failures to
//! complete the round-trip (refused connection, DNS, timeout, broken body)
//! are reported as `Err`. Timeouts belong to the transport's own
//! configuration.

use std::time::Duration;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Error type transports report; `JobsClient` wraps it into a `RequestError`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Executes a single HTTP round-trip.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with no global timeout.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Agent that aborts any call taking longer than `timeout` end to end.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    /// Wrap an agent configured by the caller. It should be built with
    /// `http_status_as_error(false)` so error bodies reach the decoder.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call()?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
