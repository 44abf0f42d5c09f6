//! Domain types for the jobs API.
//!
//! # Design
//! `Listing` mirrors the wire object field for field. Every field is an opaque
//! string and defaults to empty when the payload omits it or sends `null`,
//! so a partial object still decodes. The query types exist only long enough to be
//! rendered into a query string.

use serde::{Deserialize, Deserializer, Serialize};
use url::form_urlencoded;

/// A single job posting returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Listing {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    /// Employment type, e.g. `"Full Time"`.
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub how_to_apply: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company_logo: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub url: String,
}

/// The service sends `null` for unset fields such as `company_logo`; treat
/// it like an absent field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keyword search parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub description: String,
    pub location: String,
    pub full_time: bool,
}

impl SearchQuery {
    pub fn new(description: impl Into<String>, location: impl Into<String>, full_time: bool) -> Self {
        Self {
            description: description.into(),
            location: location.into(),
            full_time,
        }
    }

    /// Form-encode the parameters with keys in sorted order. Empty values are
    /// sent as empty parameters rather than dropped.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("description", &self.description)
            .append_pair("full_time", if self.full_time { "true" } else { "false" })
            .append_pair("location", &self.location)
            .finish()
    }
}

/// Proximity search parameters, in decimal degrees. Values are passed to the
/// server verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateQuery {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinateQuery {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("lat", &self.latitude)
            .append_pair("long", &self.longitude)
            .finish()
    }
}
