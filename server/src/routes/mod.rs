//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the session API and Leptos SSR rendering under a
//! single Axum router. The compiled client bundle is served from `/pkg`,
//! and anything unmatched falls through to the static files in `PUBLIC_DIR`.

pub mod session;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Browser-facing API routes.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/bootstrap", get(session::bootstrap))
        .route("/api/session", get(session::session))
        .route("/api/session/organization", post(session::switch_organization))
        .route("/api/session/sign-out", post(session::sign_out))
        .route("/api/session/sign-in", get(session::sign_in))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` / `LEPTOS_*` settings).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let public_service = ServeDir::new(&state.config.public_dir);

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(public_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
