//! Provider adapter seams and their shared error type.
//!
//! DESIGN
//! ======
//! The identity provider and the data backend are hosted services. Handlers
//! only see these traits, so tests swap in mocks and an unset base URL swaps
//! in a disabled adapter without touching routing code.

use std::fmt;
use std::time::Duration;

use client::net::types::{BackendStatus, Session};

use crate::config::PROVIDER_CONNECT_TIMEOUT_SECS;

/// Which hosted service an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Identity,
    DataBackend,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity provider"),
            Self::DataBackend => f.write_str("data backend"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0} not configured")]
    NotConfigured(Provider),

    #[error("{provider} unreachable: {message}")]
    Unreachable { provider: Provider, message: String },

    #[error("{0} timed out")]
    Timeout(Provider),

    #[error("{provider} returned status {status}")]
    Status { provider: Provider, status: u16 },

    #[error("{provider} response could not be decoded: {message}")]
    Decode { provider: Provider, message: String },

    #[error("http client build failed: {0}")]
    ClientBuild(String),
}

impl ProviderError {
    /// Classify a transport error from `reqwest`.
    pub fn transport(provider: Provider, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(provider)
        } else {
            Self::Unreachable { provider, message: err.to_string() }
        }
    }
}

/// Identity provider capabilities the app consumes.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current session for the browser that sent `cookie`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the provider cannot be reached or
    /// answers with something other than a session or a 401.
    async fn session(&self, cookie: Option<&str>) -> Result<Session, ProviderError>;

    /// Make `organization_id` the active organization and return the new session.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the switch is rejected or fails.
    async fn switch_organization(&self, cookie: Option<&str>, organization_id: &str)
    -> Result<Session, ProviderError>;

    /// End the session.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the provider rejects the sign-out.
    async fn sign_out(&self, cookie: Option<&str>) -> Result<(), ProviderError>;

    /// Hosted sign-in page that returns to `redirect_path` afterwards.
    fn sign_in_url(&self, redirect_path: &str) -> Option<String>;
}

/// Data backend capabilities the app consumes.
#[async_trait::async_trait]
pub trait DataBackend: Send + Sync {
    /// Readiness of the reactive data backend.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the backend cannot be reached or is
    /// not healthy.
    async fn status(&self) -> Result<BackendStatus, ProviderError>;
}

/// Shared outbound HTTP client with provider timeouts applied.
///
/// # Errors
///
/// Returns [`ProviderError::ClientBuild`] if the TLS backend fails to initialize.
pub fn http_client(timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(PROVIDER_CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::ClientBuild(e.to_string()))
}
