//! REST helpers for the server's provider relay endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since the browser session
//! cookie only exists on the client.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so provider failures can
//! move the shell gate to `Failed` or surface as toasts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Bootstrap, Session};
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, SwitchOrganizationRequest};

pub const BOOTSTRAP_ENDPOINT: &str = "/api/bootstrap";
pub const SWITCH_ORGANIZATION_ENDPOINT: &str = "/api/session/organization";
pub const SIGN_OUT_ENDPOINT: &str = "/api/session/sign-out";
pub const SIGN_IN_ENDPOINT: &str = "/api/session/sign-in";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{what} failed: {status} ({detail})"),
        _ => format!("{what} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(what: &str, resp: gloo_net::http::Response) -> String {
    let detail = resp.json::<ApiErrorBody>().await.ok().map(|body| body.error);
    request_failed_message(what, resp.status(), detail.as_deref())
}

/// Fetch the session, backend readiness, and feature flags in one request.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports a
/// provider failure.
pub async fn fetch_bootstrap() -> Result<Bootstrap, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(BOOTSTRAP_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("bootstrap", resp).await);
        }
        resp.json::<Bootstrap>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Ask the identity provider to switch the active organization.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn switch_organization(organization_id: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SwitchOrganizationRequest { organization_id: organization_id.to_owned() };
        let resp = gloo_net::http::Request::post(SWITCH_ORGANIZATION_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("organization switch", resp).await);
        }
        resp.json::<Session>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = organization_id;
        Err("not available on server".to_owned())
    }
}

/// End the identity session.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("sign out", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
