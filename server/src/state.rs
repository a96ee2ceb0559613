//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the typed config and one adapter per hosted provider. Adapters are
//! trait objects so an unset base URL selects the disabled variant and tests
//! inject mocks.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::backend::{DisabledBackend, HttpBackend};
use crate::services::identity::{DisabledIdentity, HttpIdentity};
use crate::services::provider::{DataBackend, IdentityProvider, ProviderError, http_client};

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

/// Clone is required by Axum; every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<dyn IdentityProvider>,
    pub backend: Arc<dyn DataBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, identity: Arc<dyn IdentityProvider>, backend: Arc<dyn DataBackend>) -> Self {
        Self { config: Arc::new(config), identity, backend }
    }

    /// Pick an HTTP adapter for each configured provider and a disabled one
    /// for the rest.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ClientBuild`] if the outbound HTTP client
    /// cannot be created.
    pub fn from_config(config: AppConfig) -> Result<Self, ProviderError> {
        let http = http_client(config.provider_timeout_secs)?;

        let identity: Arc<dyn IdentityProvider> = match &config.identity_url {
            Some(url) => Arc::new(HttpIdentity::new(http.clone(), url.clone())),
            None => {
                tracing::warn!("IDENTITY_PROVIDER_URL not set; every visitor is anonymous");
                Arc::new(DisabledIdentity)
            }
        };
        let backend: Arc<dyn DataBackend> = match &config.backend_url {
            Some(url) => Arc::new(HttpBackend::new(http, url.clone())),
            None => {
                tracing::warn!("DATA_BACKEND_URL not set; reporting backend as ready");
                Arc::new(DisabledBackend)
            }
        };

        Ok(Self::new(config, identity, backend))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
