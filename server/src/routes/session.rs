//! Session routes: the browser-facing facade over the hosted providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never talks to the identity provider or data backend directly.
//! It calls these handlers, which forward the browser `Cookie` header to the
//! identity provider and fold backend readiness into one bootstrap answer.
//!
//! ERROR HANDLING
//! ==============
//! Provider failures are logged and answered with `{ "error": msg }` and a
//! status from [`provider_error_to_status`].

use axum::extract::State;
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Redirect, Response};
use client::net::types::{ApiErrorBody, Bootstrap, FeatureFlags, SwitchOrganizationRequest};

use crate::services::provider::{Provider, ProviderError};
use crate::state::AppState;

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

/// Where the hosted sign-in page sends the browser back to.
pub const SIGN_IN_REDIRECT_PATH: &str = "/dashboard";

/// HTTP status for a provider failure.
#[must_use]
pub fn provider_error_to_status(err: &ProviderError) -> StatusCode {
    match err {
        ProviderError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        ProviderError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        ProviderError::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ProviderError::Unreachable { .. } | ProviderError::Status { .. } | ProviderError::Decode { .. } => {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn error_response(route: &'static str, err: &ProviderError) -> Response {
    let status = provider_error_to_status(err);
    if status == StatusCode::SERVICE_UNAVAILABLE {
        tracing::warn!(route, error = %err, "provider not configured");
    } else {
        tracing::error!(route, error = %err, %status, "provider request failed");
    }
    (status, Json(ApiErrorBody { error: err.to_string() })).into_response()
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(COOKIE).and_then(|value| value.to_str().ok())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/bootstrap`: session, backend readiness, and feature flags.
pub async fn bootstrap(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = cookie_header(&headers);
    let (session, backend) = tokio::join!(state.identity.session(cookie), state.backend.status());

    let session = match session {
        Ok(session) => session,
        Err(e) => return error_response("bootstrap", &e),
    };
    let backend = match backend {
        Ok(backend) => backend,
        Err(e) => return error_response("bootstrap", &e),
    };

    tracing::debug!(
        signed_in = session.user.is_some(),
        backend_ready = backend.ready,
        backend_configured = backend.configured,
        "bootstrap resolved"
    );
    let flags = FeatureFlags { invite_members: state.config.invite_members };
    Json(Bootstrap { session, backend, flags }).into_response()
}

/// `GET /api/session`
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state.identity.session(cookie_header(&headers)).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => error_response("session", &e),
    }
}

/// `POST /api/session/organization`: switch the active organization.
pub async fn switch_organization(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SwitchOrganizationRequest>,
) -> Response {
    let organization_id = body.organization_id.trim();
    if organization_id.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(ApiErrorBody { error: "organization_id required".into() }))
            .into_response();
    }

    match state
        .identity
        .switch_organization(cookie_header(&headers), organization_id)
        .await
    {
        Ok(session) => {
            tracing::info!(%organization_id, "active organization switched");
            Json(session).into_response()
        }
        Err(e) => error_response("switch_organization", &e),
    }
}

/// `POST /api/session/sign-out`
pub async fn sign_out(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state.identity.sign_out(cookie_header(&headers)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("sign_out", &e),
    }
}

/// `GET /api/session/sign-in`: hand the browser to the hosted sign-in page.
pub async fn sign_in(State(state): State<AppState>) -> Response {
    match state.identity.sign_in_url(SIGN_IN_REDIRECT_PATH) {
        Some(url) => Redirect::temporary(&url).into_response(),
        None => error_response("sign_in", &ProviderError::NotConfigured(Provider::Identity)),
    }
}
