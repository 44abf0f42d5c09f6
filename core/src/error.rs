//! The single error type returned by every `JobsClient` operation.
//!
//! # Design
//! The jobs service never reports machine-readable error codes, so transport
//! failures, undecodable bodies and unknown identifiers all collapse into one
//! `RequestError` carrying a human-readable message. `code` is kept for
//! callers that log it and is always [`RequestError::SENTINEL_CODE`].

/// Failure to build, send, or decode a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("githubjobs: {message} ({code})")]
pub struct RequestError {
    pub message: String,
    pub code: i32,
}

impl RequestError {
    pub const SENTINEL_CODE: i32 = -1;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Self::SENTINEL_CODE,
        }
    }

    /// The endpoint or request could not be constructed.
    pub(crate) fn invalid_request(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Could not create request: {detail}"))
    }

    /// The transport could not complete the round-trip.
    pub(crate) fn transport(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to make request: {detail}"))
    }

    /// The body was not the JSON shape the operation expects.
    pub(crate) fn decode(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Could not read JSON response: {detail}"))
    }

    /// The body decoded but did not describe a listing.
    pub(crate) fn not_found(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Could not find position: {detail}"))
    }
}
