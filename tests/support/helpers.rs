// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use folio_core::application::ports::security::TokenManager;
use folio_core::application::services::{ApplicationServices, ServiceDependencies};
use folio_core::infrastructure::repositories::InMemoryStore;
use folio_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Services over a fresh in-memory store with the fixed clock, the simple
/// slugger and the table-driven token manager.
pub fn build_test_services(store: &InMemoryStore) -> Arc<ApplicationServices> {
    build_services_with(store, Arc::new(mocks::DummyTokenManager))
}

/// Same wiring as [`build_test_services`] with a caller-chosen token manager.
pub fn build_services_with(
    store: &InMemoryStore,
    token_manager: Arc<dyn TokenManager>,
) -> Arc<ApplicationServices> {
    let store = Arc::new(store.clone());
    Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo: store.clone(),
        article_write_repo: store.clone(),
        article_read_repo: store.clone(),
        category_repo: store,
        token_manager,
        clock: Arc::new(mocks::DummyClock),
        slugger: Arc::new(mocks::DummySlug),
    }))
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: build_test_services(&InMemoryStore::new()),
    }
}

pub fn make_test_router() -> axum::Router {
    router_for(build_test_state())
}

pub fn router_for(state: HttpState) -> axum::Router {
    build_router(
        state,
        &RouterOptions {
            allowed_origins: Vec::new(),
            rate_limit: false,
        },
    )
}

/// Issue one request against a clone of `app`.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("router is infallible")
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Send and decode, asserting the expected status first.
pub async fn send_expect(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
    expected: StatusCode,
) -> Value {
    let resp = send(app, method, uri, token, body).await;
    let status = resp.status();
    let json = json_body(resp).await;
    assert_eq!(status, expected, "unexpected status for {uri}: {json}");
    json
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Create a category as the admin and return its id.
pub async fn seed_category(app: &axum::Router, name: &str) -> i64 {
    let json = send_expect(
        app,
        Method::POST,
        "/api/v1/categories",
        Some(mocks::ADMIN_TOKEN),
        Some(serde_json::json!({ "category_name": name })),
        StatusCode::CREATED,
    )
    .await;
    json["id"].as_i64().expect("category id")
}

/// Create an article as the holder of `token` and return the response body.
pub async fn seed_article(app: &axum::Router, token: &str, title: &str, category_id: i64) -> Value {
    send_expect(
        app,
        Method::POST,
        "/api/v1/articles",
        Some(token),
        Some(super::builders::article_payload(title, category_id)),
        StatusCode::CREATED,
    )
    .await
}
