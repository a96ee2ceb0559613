//! Data backend readiness adapters.

use client::net::types::BackendStatus;

use super::provider::{DataBackend, Provider, ProviderError};

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

/// Probes the hosted data backend's `/version` endpoint.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait::async_trait]
impl DataBackend for HttpBackend {
    async fn status(&self) -> Result<BackendStatus, ProviderError> {
        let response = self
            .http
            .get(format!("{}/version", self.base_url))
            .send()
            .await
            .map_err(|e| ProviderError::transport(Provider::DataBackend, &e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::transport(Provider::DataBackend, &e))?;
        status_from_probe(status, &body)
    }
}

/// Interpret a `/version` probe: any 2xx is ready, the body is the version.
///
/// # Errors
///
/// Returns [`ProviderError::Status`] for non-2xx answers.
pub fn status_from_probe(status: u16, body: &str) -> Result<BackendStatus, ProviderError> {
    if !(200..300).contains(&status) {
        return Err(ProviderError::Status { provider: Provider::DataBackend, status });
    }
    let version = body.trim();
    Ok(BackendStatus {
        ready: true,
        configured: true,
        version: (!version.is_empty()).then(|| version.to_owned()),
    })
}

/// Stand-in used when no data backend is configured (local development).
pub struct DisabledBackend;

#[async_trait::async_trait]
impl DataBackend for DisabledBackend {
    async fn status(&self) -> Result<BackendStatus, ProviderError> {
        Ok(BackendStatus { ready: true, configured: false, version: None })
    }
}
