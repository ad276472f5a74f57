//! # Environment-Based Configuration
//!
//! Connection settings for the forensics API, loadable from environment
//! variables and overridable through the builder.
//!
//! ## Environment Variables
//!
//! - `SEARCHPARTY_API_BASE_URL` - API root (default: `https://which-technical-exercise.herokuapp.com/api/`)
//! - `SEARCHPARTY_EMAIL` - Identifier keying every request (required)
//! - `SEARCHPARTY_REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::{env, time::Duration};
use url::Url;

/// Default API root of the forensics service
pub const DEFAULT_BASE_URL: &str = "https://which-technical-exercise.herokuapp.com/api/";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

pub const ENV_BASE_URL: &str = "SEARCHPARTY_API_BASE_URL";
pub const ENV_EMAIL: &str = "SEARCHPARTY_EMAIL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "SEARCHPARTY_REQUEST_TIMEOUT_SECS";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable '{key}': {message}")]
    InvalidEnvVar { key: String, message: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Validated settings for talking to the forensics API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForensicsConfig {
    /// API root; requests go to `<base_url>/<email>/...`
    pub base_url: Url,
    /// Identifier keying every request
    pub email: String,
    /// Per-request timeout enforced by the HTTP transport
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl ForensicsConfig {
    /// Start building a configuration from defaults
    #[must_use]
    pub fn builder() -> ForensicsConfigBuilder {
        ForensicsConfigBuilder::new()
    }
}

/// Builder for `ForensicsConfig` with environment variable support
#[derive(Debug, Clone)]
pub struct ForensicsConfigBuilder {
    base_url: String,
    email: Option<String>,
    request_timeout_secs: u64,
    user_agent: String,
}

impl Default for ForensicsConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: format!("searchparty/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ForensicsConfigBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to an
    /// unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to an
    /// unparsable value.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            Url::parse(&base_url).map_err(|e| ConfigError::InvalidEnvVar {
                key: ENV_BASE_URL.to_string(),
                message: format!("invalid URL '{base_url}': {e}"),
            })?;
            builder = builder.base_url(base_url);
        }
        if let Some(email) = lookup(ENV_EMAIL) {
            builder = builder.email(email);
        }
        if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    key: ENV_REQUEST_TIMEOUT_SECS.to_string(),
                    message: format!("invalid number '{timeout}': {e}"),
                })?;
            builder = builder.request_timeout_secs(secs);
        }

        Ok(builder)
    }

    /// Set the API root
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the identifier keying every request
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set request timeout in seconds
    #[must_use]
    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.request_timeout_secs = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate configuration and build `ForensicsConfig`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if the configuration is invalid.
    pub fn build(self) -> Result<ForensicsConfig, ConfigError> {
        let base_url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::ValidationError(format!("base_url '{}' is invalid: {e}", self.base_url))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError(format!(
                "base_url '{base_url}' must be an http(s) URL"
            )));
        }

        let email = self.email.unwrap_or_default();
        if email.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "email is required (set {ENV_EMAIL} or pass --email)"
            )));
        }
        if email.contains('/') {
            return Err(ConfigError::ValidationError(
                "email cannot contain '/'".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be <= 300 (5 minutes)".to_string(),
            ));
        }

        Ok(ForensicsConfig {
            base_url,
            email,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            user_agent: self.user_agent,
        })
    }
}
