//! Forensics API Client
//!
//! Thin JSON-over-HTTP client for the remote forensics service. Every request
//! is keyed by the configured email:
//!
//! | Endpoint | Path |
//! |----------|------|
//! | Directions | `<base_url>/<email>/directions` |
//! | Location | `<base_url>/<email>/location/<x>/<y>` |
//!
//! The service reports application errors inside the JSON body, so a non-2xx
//! status is logged but the body is still handed back for classification.
//! The client does **not** retry; the only timeout is the one configured on
//! the underlying `reqwest` client.

use reqwest::Client;
use serde_json::Value;
use tracing::info;
use url::Url;

use crate::config::ForensicsConfig;

/// Errors raised before a JSON body could be obtained
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The base URL cannot take additional path segments
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request could not be sent or no response arrived
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not valid JSON
    #[error("failed to parse JSON response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client bound to one API root and email
#[derive(Clone)]
pub struct ForensicsClient {
    base_url: Url,
    email: String,
    http: Client,
}

impl std::fmt::Debug for ForensicsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForensicsClient")
            .field("base_url", &self.base_url.as_str())
            .field("email", &self.email)
            .finish()
    }
}

impl ForensicsClient {
    /// Create a client with its own connection pool
    pub fn new(config: &ForensicsConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self::with_http_client(config, http))
    }

    /// Create a client sharing an existing `reqwest` client
    pub fn with_http_client(config: &ForensicsConfig, http: Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            email: config.email.clone(),
            http,
        }
    }

    /// Build `<base_url>/<email>/<segments...>`
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&self.email)
            .extend(segments);
        Ok(url)
    }

    /// GET an endpoint and return its decoded JSON body, whatever its shape
    pub async fn get(&self, segments: &[&str]) -> Result<Value, ClientError> {
        let url = self.endpoint(segments)?;
        info!(url = %url, "Making request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        info!(status = response.status().as_u16(), "Response received");

        let json: Value = response.json().await.map_err(ClientError::Decode)?;
        info!(content = %json, "JSON response parsed");

        Ok(json)
    }
}
