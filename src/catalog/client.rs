//! HTTP client for the FreeToGame catalog endpoint
//!
//! The client performs exactly one GET per [`GameSource::load`] call. There is
//! no retry, no caching, and no timeout policy of its own; the request
//! resolves or fails according to reqwest's defaults.

use std::time::Duration;

use super::error::{CatalogError, Result};
use super::types::Game;
use super::GameSource;

/// Blocking HTTP client for the catalog API
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    relay: Option<String>,
}

impl CatalogClient {
    /// Default request timeout; reqwest would otherwise wait forever
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client for the given endpoint
    ///
    /// When `relay` is set, the request URL is the relay prefix followed by
    /// the endpoint URL. The public relay expects the target appended
    /// verbatim, so no percent-encoding is applied.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: impl Into<String>, relay: Option<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("gamedex/", env!("CARGO_PKG_VERSION")))
            .timeout(Self::TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            relay: relay.filter(|prefix| !prefix.is_empty()),
        })
    }

    /// The URL actually requested, with the relay prefix applied if any
    #[must_use]
    pub fn request_url(&self) -> String {
        match &self.relay {
            Some(prefix) => format!("{prefix}{}", self.endpoint),
            None => self.endpoint.clone(),
        }
    }
}

impl GameSource for CatalogClient {
    fn load(&self) -> Result<Vec<Game>> {
        let response = self.http.get(self.request_url()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_games(&body)
    }
}

/// Validate a response body against the expected array-of-games shape
///
/// Kept separate from the network call so schema validation is testable
/// without a socket. Any deviation (non-JSON body, a non-array top level,
/// or a malformed item) is a [`CatalogError::Schema`].
///
/// # Errors
///
/// Returns `CatalogError::Schema` describing the first mismatch found.
pub fn parse_games(body: &str) -> Result<Vec<Game>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| CatalogError::Schema(e.to_string()))?;

    if !value.is_array() {
        return Err(CatalogError::Schema(format!(
            "expected a JSON array, got {}",
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| CatalogError::Schema(e.to_string()))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
