//! Jolpica F1 API client
//!
//! HTTP client for the Jolpica/Ergast F1 API. Responses are decoded JSON
//! passed through untouched. Failures are normalized into a small taxonomy
//! that carries an HTTP status for the boundary to mirror. A failed attempt
//! is reported once; retrying is left to callers.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::resource::Resource;

/// Jolpica client errors
#[derive(Debug, Error)]
pub enum JolpicaError {
    /// Upstream responded with a non-2xx status; body preserved when decodable
    #[error("Upstream API error: HTTP {status}")]
    Upstream { status: u16, body: Option<Value> },

    /// The request never reached upstream (connection failure or timeout)
    #[error("Network error: unable to reach the F1 API")]
    Network(String),

    /// Upstream answered 2xx with a body that is not valid JSON
    #[error("Invalid upstream payload: {0}")]
    Decode(String),

    /// The request could not be constructed; a programmer error
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl JolpicaError {
    /// The HTTP status the proxy should surface for this failure
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Network(_) => 503,
            Self::Decode(_) => 502,
            Self::InvalidRequest(_) => 500,
        }
    }
}

/// Jolpica client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JolpicaConfig {
    /// API base URL (default: <http://api.jolpi.ca/ergast/f1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for upstream requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://api.jolpi.ca/ergast/f1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("f1-proxy/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for JolpicaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Upstream F1 data access trait
#[async_trait]
pub trait F1Api: Send + Sync {
    /// Fetch a resource's payload from the upstream API
    async fn fetch(&self, resource: &Resource) -> Result<Value, JolpicaError>;
}

/// Jolpica HTTP client implementation
#[derive(Debug, Clone)]
pub struct JolpicaClient {
    client: Client,
    base_url: String,
}

impl JolpicaClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: JolpicaConfig) -> Result<Self, JolpicaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| JolpicaError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, JolpicaError> {
        Self::new(JolpicaConfig::default())
    }

    fn url_for(&self, resource: &Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }
}

#[async_trait]
impl F1Api for JolpicaClient {
    #[instrument(skip(self), fields(path = %resource.path()))]
    async fn fetch(&self, resource: &Resource) -> Result<Value, JolpicaError> {
        let url = self.url_for(resource);
        debug!(url = %url, "Fetching upstream resource");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_builder() {
                JolpicaError::InvalidRequest(e.to_string())
            } else {
                warn!(url = %url, error = %e, "Upstream request failed to complete");
                JolpicaError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Upstream returned an error status");
            let body = response.json::<Value>().await.ok();
            return Err(JolpicaError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|e| JolpicaError::Decode(e.to_string()))?;

        debug!(url = %url, "Upstream response decoded");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value_objects::SeasonYear;

    #[test]
    fn config_defaults() {
        let config = JolpicaConfig::default();
        assert_eq!(config.base_url, "http://api.jolpi.ca/ergast/f1");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("f1-proxy/"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = JolpicaClient::new(JolpicaConfig {
            base_url: "http://example.com/f1/".to_string(),
            ..JolpicaConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.url_for(&Resource::Seasons),
            "http://example.com/f1/seasons.json"
        );
    }

    #[test]
    fn url_substitutes_parameters() {
        let client = JolpicaClient::with_defaults().unwrap();
        let resource = Resource::Drivers {
            year: SeasonYear::Current,
        };
        assert_eq!(
            client.url_for(&resource),
            "http://api.jolpi.ca/ergast/f1/current/drivers.json"
        );
    }

    #[test]
    fn error_statuses() {
        let upstream = JolpicaError::Upstream {
            status: 404,
            body: None,
        };
        assert_eq!(upstream.status(), 404);
        assert_eq!(JolpicaError::Network("timeout".into()).status(), 503);
        assert_eq!(JolpicaError::Decode("bad json".into()).status(), 502);
        assert_eq!(JolpicaError::InvalidRequest("bad url".into()).status(), 500);
    }

    #[test]
    fn error_messages() {
        let err = JolpicaError::Upstream {
            status: 500,
            body: None,
        };
        assert_eq!(err.to_string(), "Upstream API error: HTTP 500");

        let err = JolpicaError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: unable to reach the F1 API");
    }
}
