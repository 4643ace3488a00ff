use axum::http::{Method, StatusCode};

mod support;

use support::{
    AUTHOR_TOKEN, EXPIRED_TOKEN, assert_error_response, make_test_router, seed_category, send,
};

/// Unknown slugs return 404 Not Found.
#[tokio::test]
async fn e2e_get_article_by_slug_not_found_returns_404() {
    let app = make_test_router();
    let resp = send(&app, Method::GET, "/api/v1/articles/by-slug/nonexistent", None, None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// Writes without a bearer token return 401.
#[tokio::test]
async fn e2e_create_without_token_returns_401() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;
    let resp = send(
        &app,
        Method::POST,
        "/api/v1/articles",
        None,
        Some(support::article_payload("Anonymous", category)),
    )
    .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

/// A token that is present must verify, even on public reads.
#[tokio::test]
async fn e2e_invalid_token_on_public_route_returns_401() {
    let app = make_test_router();
    for token in [EXPIRED_TOKEN, "garbage"] {
        let resp = send(&app, Method::GET, "/api/v1/articles", Some(token), None).await;
        assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
    }
}

/// Malformed cursors are rejected with 400.
#[tokio::test]
async fn e2e_invalid_cursor_returns_400() {
    let app = make_test_router();
    let resp = send(&app, Method::GET, "/api/v1/articles?cursor=not-a-cursor", None, None).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// Non-positive ids are invalid arguments, not missing rows.
#[tokio::test]
async fn e2e_non_positive_id_returns_400() {
    let app = make_test_router();
    let resp = send(&app, Method::GET, "/api/v1/articles/0", None, None).await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// Missing articles return 404 for writes as well.
#[tokio::test]
async fn e2e_archive_unknown_article_returns_404() {
    let app = make_test_router();
    let resp = send(
        &app,
        Method::POST,
        "/api/v1/articles/42/archive",
        Some(AUTHOR_TOKEN),
        Some(serde_json::json!({ "archived": true })),
    )
    .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// Referencing a category that does not exist is a 400.
#[tokio::test]
async fn e2e_unknown_category_returns_400() {
    let app = make_test_router();
    let resp = send(
        &app,
        Method::POST,
        "/api/v1/articles",
        Some(AUTHOR_TOKEN),
        Some(support::article_payload("Orphan", 77)),
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}
