//! Request builder, response parser and blocking round-trip for the jobs API.
//!
//! # Design
//! `JobsClient` holds only an endpoint and a transport and carries no mutable
//! state between calls. Every operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the public operations glue the two together around a
//! single `Transport::execute`. HTTP status codes are not interpreted: a body
//! either decodes into the expected shape or the call fails.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{CoordinateQuery, Listing, SearchQuery};

/// Base URL of the public jobs service.
pub const DEFAULT_ENDPOINT: &str = "https://jobs.github.com";

/// Environment variable read by [`JobsClient::from_env`].
pub const ENDPOINT_ENV: &str = "GITHUBJOBS_ENDPOINT";

/// Error object the service returns for unknown identifiers.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Stateless client for the jobs API.
#[derive(Debug, Clone)]
pub struct JobsClient<T = UreqTransport> {
    endpoint: String,
    transport: T,
}

impl JobsClient<UreqTransport> {
    /// Client for `endpoint` using a default `UreqTransport`.
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self::new(endpoint, UreqTransport::new())
    }

    /// Client for the endpoint named by `GITHUBJOBS_ENDPOINT`, or
    /// [`DEFAULT_ENDPOINT`] when the variable is unset.
    pub fn from_env() -> Result<Self, RequestError> {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::try_new(&endpoint, UreqTransport::new())
    }
}

impl Default for JobsClient<UreqTransport> {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }
}

impl<T: Transport> JobsClient<T> {
    pub fn new(endpoint: &str, transport: T) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Like [`JobsClient::new`], but rejects endpoints that are not absolute
    /// http(s) URLs.
    pub fn try_new(endpoint: &str, transport: T) -> Result<Self, RequestError> {
        let url = Url::parse(endpoint).map_err(RequestError::invalid_request)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RequestError::invalid_request(format!(
                "unsupported scheme {:?} in {endpoint}",
                url.scheme()
            )));
        }
        Ok(Self::new(endpoint, transport))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Search listings by free-text description and location.
    pub fn positions(
        &self,
        description: &str,
        location: &str,
        full_time: bool,
    ) -> Result<Vec<Listing>, RequestError> {
        let req = self.build_positions(&SearchQuery::new(description, location, full_time));
        let response = self.round_trip(req)?;
        self.parse_positions(response)
    }

    /// Search listings near a point given in decimal degrees.
    pub fn positions_by_coordinates(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<Vec<Listing>, RequestError> {
        let req = self.build_positions_by_coordinates(&CoordinateQuery::new(latitude, longitude));
        let response = self.round_trip(req)?;
        self.parse_positions(response)
    }

    /// Fetch a single listing by identifier.
    pub fn position(&self, id: &str) -> Result<Listing, RequestError> {
        let req = self.build_position(id);
        let response = self.round_trip(req)?;
        self.parse_position(response)
    }

    pub fn build_positions(&self, query: &SearchQuery) -> HttpRequest {
        self.get(format!(
            "{}/positions.json?{}",
            self.endpoint,
            query.to_query_string()
        ))
    }

    pub fn build_positions_by_coordinates(&self, query: &CoordinateQuery) -> HttpRequest {
        self.get(format!(
            "{}/positions.json?{}",
            self.endpoint,
            query.to_query_string()
        ))
    }

    pub fn build_position(&self, id: &str) -> HttpRequest {
        self.get(format!(
            "{}/positions/{}.json",
            self.endpoint,
            urlencoding::encode(id)
        ))
    }

    /// Decode a search response. Order is preserved as sent by the server.
    pub fn parse_positions(&self, response: HttpResponse) -> Result<Vec<Listing>, RequestError> {
        let listings: Vec<Listing> = decode(&response)?;
        debug!(count = listings.len(), "decoded listings");
        Ok(listings)
    }

    /// Decode a lookup response. An object without an `id` is the service's
    /// way of saying the identifier did not resolve.
    pub fn parse_position(&self, response: HttpResponse) -> Result<Listing, RequestError> {
        let listing: Listing = decode(&response)?;
        if listing.id.is_empty() {
            let reason = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP {} without listing id", response.status));
            warn!(status = response.status, %reason, "position did not resolve");
            return Err(RequestError::not_found(reason));
        }
        Ok(listing)
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    fn round_trip(&self, req: HttpRequest) -> Result<HttpResponse, RequestError> {
        debug!(method = req.method.as_str(), url = %req.url, "sending request");
        let response = self.transport.execute(&req).map_err(|e| {
            warn!(url = %req.url, error = %e, "request failed");
            RequestError::transport(e)
        })?;
        debug!(status = response.status, bytes = response.body.len(), "response received");
        Ok(response)
    }
}

fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, RequestError> {
    serde_json::from_str(&response.body).map_err(|e| {
        warn!(status = response.status, error = %e, "could not decode response body");
        RequestError::decode(e)
    })
}
