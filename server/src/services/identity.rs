//! Identity provider adapters: the hosted HTTP client and the disabled fallback.

use client::net::types::{Session, SwitchOrganizationRequest};
use client::util::search::encode_query_value;
use reqwest::header::COOKIE;

use super::provider::{IdentityProvider, Provider, ProviderError};

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

/// Client for the hosted identity provider's session API.
pub struct HttpIdentity {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIdentity {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder, cookie: Option<&str>) -> Result<(u16, String), ProviderError> {
        let request = match cookie {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::transport(Provider::Identity, &e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::transport(Provider::Identity, &e))?;
        Ok((status, body))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentity {
    async fn session(&self, cookie: Option<&str>) -> Result<Session, ProviderError> {
        let (status, body) = self.send(self.http.get(self.endpoint("/v1/session")), cookie).await?;
        decode_session(status, &body)
    }

    async fn switch_organization(
        &self,
        cookie: Option<&str>,
        organization_id: &str,
    ) -> Result<Session, ProviderError> {
        let body = SwitchOrganizationRequest { organization_id: organization_id.to_owned() };
        let request = self
            .http
            .post(self.endpoint("/v1/session/active-organization"))
            .json(&body);
        let (status, body) = self.send(request, cookie).await?;
        if status == 401 {
            return Err(ProviderError::Status { provider: Provider::Identity, status });
        }
        decode_session(status, &body)
    }

    async fn sign_out(&self, cookie: Option<&str>) -> Result<(), ProviderError> {
        let (status, _) = self
            .send(self.http.post(self.endpoint("/v1/session/sign-out")), cookie)
            .await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ProviderError::Status { provider: Provider::Identity, status })
        }
    }

    fn sign_in_url(&self, redirect_path: &str) -> Option<String> {
        Some(format!("{}/sign-in?redirect_url={}", self.base_url, encode_query_value(redirect_path)))
    }
}

/// Interpret a session response: 2xx carries a session, 401 is anonymous.
///
/// # Errors
///
/// Returns [`ProviderError::Status`] for other statuses and
/// [`ProviderError::Decode`] for a malformed body.
pub fn decode_session(status: u16, body: &str) -> Result<Session, ProviderError> {
    match status {
        401 => Ok(Session::anonymous()),
        200..=299 => serde_json::from_str(body)
            .map_err(|e| ProviderError::Decode { provider: Provider::Identity, message: e.to_string() }),
        _ => Err(ProviderError::Status { provider: Provider::Identity, status }),
    }
}

/// Stand-in used when no identity provider is configured.
///
/// Every visitor is anonymous and session mutations are refused.
pub struct DisabledIdentity;

#[async_trait::async_trait]
impl IdentityProvider for DisabledIdentity {
    async fn session(&self, _cookie: Option<&str>) -> Result<Session, ProviderError> {
        Ok(Session::anonymous())
    }

    async fn switch_organization(
        &self,
        _cookie: Option<&str>,
        _organization_id: &str,
    ) -> Result<Session, ProviderError> {
        Err(ProviderError::NotConfigured(Provider::Identity))
    }

    async fn sign_out(&self, _cookie: Option<&str>) -> Result<(), ProviderError> {
        Err(ProviderError::NotConfigured(Provider::Identity))
    }

    fn sign_in_url(&self, _redirect_path: &str) -> Option<String> {
        None
    }
}
