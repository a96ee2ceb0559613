use super::*;

#[test]
fn decode_session_unauthorized_is_anonymous() {
    assert_eq!(decode_session(401, "").unwrap(), Session::anonymous());
}

#[test]
fn decode_session_parses_success_body() {
    let body = r#"{
        "user": {"id": "u1", "name": "Ada", "email": "ada@example.com"},
        "organizations": [{"id": "org_1", "name": "Acme"}],
        "active_organization_id": "org_1"
    }"#;
    let session = decode_session(200, body).unwrap();
    assert_eq!(session.user.map(|u| u.name), Some("Ada".to_owned()));
    assert_eq!(session.organizations.len(), 1);
    assert_eq!(session.active_organization_id.as_deref(), Some("org_1"));
}

#[test]
fn decode_session_rejects_malformed_body() {
    let err = decode_session(200, "not json").unwrap_err();
    assert!(matches!(err, ProviderError::Decode { provider: Provider::Identity, .. }));
}

#[test]
fn decode_session_maps_server_error_status() {
    assert_eq!(
        decode_session(500, "boom").unwrap_err(),
        ProviderError::Status { provider: Provider::Identity, status: 500 }
    );
}

#[test]
fn http_identity_sign_in_url_carries_redirect() {
    let identity = HttpIdentity::new(reqwest::Client::new(), "https://id.example.test".to_owned());
    assert_eq!(
        identity.sign_in_url("/dashboard").as_deref(),
        Some("https://id.example.test/sign-in?redirect_url=%2Fdashboard")
    );
}

#[tokio::test]
async fn disabled_identity_is_anonymous() {
    let session = DisabledIdentity.session(Some("session=abc")).await.unwrap();
    assert_eq!(session, Session::anonymous());
}

#[tokio::test]
async fn disabled_identity_refuses_mutations() {
    assert_eq!(
        DisabledIdentity.switch_organization(None, "org_1").await.unwrap_err(),
        ProviderError::NotConfigured(Provider::Identity)
    );
    assert_eq!(DisabledIdentity.sign_out(None).await.unwrap_err(), ProviderError::NotConfigured(Provider::Identity));
    assert_eq!(DisabledIdentity.sign_in_url("/dashboard"), None);
}

// =============================================================================
// HttpIdentity against a local identity stub
// =============================================================================

mod http {
    use axum::Json;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use client::net::types::{Organization, Session, SwitchOrganizationRequest, User};

    use super::super::*;
    use crate::services::provider::http_client;

    const COOKIE_VALUE: &str = "__session=abc";

    fn stub_session(active: &str) -> Session {
        Session {
            user: Some(User { id: "user_1".into(), name: "Ada".into(), email: None, avatar_url: None }),
            organizations: vec![
                Organization { id: "org_1".into(), name: "Acme".into(), slug: None, image_url: None },
                Organization { id: "org_2".into(), name: "Globex".into(), slug: None, image_url: None },
            ],
            active_organization_id: Some(active.into()),
        }
    }

    fn has_cookie(headers: &HeaderMap) -> bool {
        headers.get(COOKIE).and_then(|v| v.to_str().ok()) == Some(COOKIE_VALUE)
    }

    async fn session(headers: HeaderMap) -> Response {
        if has_cookie(&headers) {
            Json(stub_session("org_1")).into_response()
        } else {
            StatusCode::UNAUTHORIZED.into_response()
        }
    }

    async fn switch(headers: HeaderMap, Json(body): Json<SwitchOrganizationRequest>) -> Response {
        if has_cookie(&headers) {
            Json(stub_session(&body.organization_id)).into_response()
        } else {
            StatusCode::UNAUTHORIZED.into_response()
        }
    }

    async fn sign_out(headers: HeaderMap) -> StatusCode {
        if has_cookie(&headers) { StatusCode::NO_CONTENT } else { StatusCode::UNAUTHORIZED }
    }

    async fn slow_session() -> StatusCode {
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        StatusCode::OK
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn stub_identity() -> HttpIdentity {
        let router = Router::new()
            .route("/v1/session", get(session))
            .route("/v1/session/active-organization", post(switch))
            .route("/v1/session/sign-out", post(sign_out));
        HttpIdentity::new(http_client(5).unwrap(), serve(router).await)
    }

    #[tokio::test]
    async fn session_forwards_cookie() {
        let identity = stub_identity().await;
        let session = identity.session(Some(COOKIE_VALUE)).await.unwrap();
        assert_eq!(session, stub_session("org_1"));
    }

    #[tokio::test]
    async fn session_without_cookie_is_anonymous() {
        let identity = stub_identity().await;
        assert_eq!(identity.session(None).await.unwrap(), Session::anonymous());
    }

    #[tokio::test]
    async fn switch_organization_posts_body_and_cookie() {
        let identity = stub_identity().await;
        let session = identity.switch_organization(Some(COOKIE_VALUE), "org_2").await.unwrap();
        assert_eq!(session.active_organization_id.as_deref(), Some("org_2"));
    }

    #[tokio::test]
    async fn switch_organization_unauthorized_is_status_error() {
        let identity = stub_identity().await;
        assert_eq!(
            identity.switch_organization(None, "org_2").await.unwrap_err(),
            ProviderError::Status { provider: Provider::Identity, status: 401 }
        );
    }

    #[tokio::test]
    async fn sign_out_forwards_cookie() {
        let identity = stub_identity().await;
        identity.sign_out(Some(COOKIE_VALUE)).await.unwrap();
        assert_eq!(
            identity.sign_out(None).await.unwrap_err(),
            ProviderError::Status { provider: Provider::Identity, status: 401 }
        );
    }

    #[tokio::test]
    async fn closed_port_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let identity = HttpIdentity::new(http_client(5).unwrap(), format!("http://{addr}"));
        let err = identity.session(None).await.unwrap_err();
        assert!(matches!(err, ProviderError::Unreachable { provider: Provider::Identity, .. }), "{err:?}");
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let base = serve(Router::new().route("/v1/session", get(slow_session))).await;
        let identity = HttpIdentity::new(http_client(1).unwrap(), base);
        assert_eq!(identity.session(None).await.unwrap_err(), ProviderError::Timeout(Provider::Identity));
    }
}

#[test]
fn http_identity_sign_in_url_encodes_redirect_with_query() {
    let identity = HttpIdentity::new(reqwest::Client::new(), "https://id.example.test".to_owned());
    assert_eq!(
        identity.sign_in_url("/dashboard?org=a&b").as_deref(),
        Some("https://id.example.test/sign-in?redirect_url=%2Fdashboard%3Forg%3Da%26b")
    );
}
