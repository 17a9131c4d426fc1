//! Endpoint configuration.
//!
//! The endpoint is fixed when the `ApiConfig` is built and the client only
//! ever reads it.

use crate::error::ApiError;

/// Environment variable consulted by `ApiConfig::from_env`.
pub const ENDPOINT_VAR: &str = "API_ENDPOINT";

/// Immutable base-URL configuration injected into `RequestClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    endpoint: String,
}

impl ApiConfig {
    /// A trailing `/` is trimmed so paths can always start with one.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Read the endpoint from `API_ENDPOINT`.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = std::env::var(ENDPOINT_VAR)
            .map_err(|e| ApiError::Config(format!("{ENDPOINT_VAR}: {e}")))?;
        Self::parse(&raw)
    }

    /// Like `new`, but rejects blank input.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Config("endpoint is empty".to_string()));
        }
        Ok(Self::new(trimmed))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
