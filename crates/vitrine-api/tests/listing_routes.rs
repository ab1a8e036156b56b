use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use vitrine_client::GraphqlClient;
use vitrine_core::{build_session_store, AppConfig, AppState};

const TEST_ADDRESS: &str = "0xabababababababababababababababababababab";

fn test_app() -> Router {
    // Endpoint points at a discard port; these tests only exercise paths
    // that resolve before any backend round-trip.
    let client = GraphqlClient::new("http://127.0.0.1:9", None, 0).expect("client");
    let state = AppState {
        client: Arc::new(client),
        config: AppConfig {
            default_limit: 12,
            limit_choices: vec![12, 24, 36, 48],
            home_collections: Vec::new(),
            public_url: None,
            cookie_secure: false,
            session_ttl_seconds: 60,
        },
        notification_sessions: build_session_store(Duration::from_secs(60)),
    };
    vitrine_api::build_router().with_state(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let request = Request::builder().uri("/health").body(Body::empty())?;
    let response = test_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["service"], "vitrine");
    Ok(())
}

#[tokio::test]
async fn home_grid_without_configured_collections_is_empty() -> anyhow::Result<()> {
    let request = Request::builder()
        .uri("/api/v1/home/collections")
        .body(Body::empty())?;
    let response = test_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["collections"], serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn notifications_require_an_account() -> anyhow::Result<()> {
    let request = Request::builder()
        .uri("/api/v1/notifications")
        .body(Body::empty())?;
    let response = test_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn malformed_account_header_is_rejected() -> anyhow::Result<()> {
    let request = Request::builder()
        .uri("/api/v1/notifications")
        .header("x-wallet-address", "not-an-address")
        .body(Body::empty())?;
    let response = test_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn load_more_on_unknown_session_is_not_found() -> anyhow::Result<()> {
    let request = Request::builder()
        .method("POST")
        .uri(format!(
            "/api/v1/notifications/{}/more",
            uuid::Uuid::new_v4()
        ))
        .header("x-wallet-address", TEST_ADDRESS)
        .body(Body::empty())?;
    let response = test_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_profile_address_is_a_bad_request() -> anyhow::Result<()> {
    let request = Request::builder()
        .uri("/api/v1/users/xyz/owned?page=2&limit=24")
        .body(Body::empty())?;
    let response = test_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("invalid address"));
    Ok(())
}
