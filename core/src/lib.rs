//! Blocking client for the GitHub Jobs style job-listing API.
//!
//! # Overview
//! Three operations, each exactly one GET round-trip: keyword search
//! ([`JobsClient::positions`]), proximity search
//! ([`JobsClient::positions_by_coordinates`]) and lookup by identifier
//! ([`JobsClient::position`]). Responses decode into [`Listing`] values;
//! every failure is a [`RequestError`].
//!
//! # Design
//! - `JobsClient` holds only an endpoint and a [`Transport`]; no state is
//!   shared between calls, so a client can be used from several threads.
//! - Each operation is also exposed as a pure `build_*` / `parse_*` pair, so
//!   request construction and decoding can be tested without I/O.
//! - No retries, pagination, caching or authentication.
//!
//! ```no_run
//! use githubjobs::{JobsClient, Stringify, DEFAULT_ENDPOINT};
//!
//! let client = JobsClient::with_endpoint(DEFAULT_ENDPOINT);
//! let listings = client.positions("rust", "", true)?;
//! println!("{}", listings.stringify());
//! # Ok::<(), githubjobs::RequestError>(())
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod stringify;
pub mod transport;
pub mod types;

pub use client::{JobsClient, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::RequestError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use stringify::Stringify;
pub use transport::{BoxError, Transport, UreqTransport};
pub use types::{CoordinateQuery, Listing, SearchQuery};
