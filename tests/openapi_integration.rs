use axum::http::{Method, StatusCode};

mod support;

use support::{json_body, make_test_router, send};

#[tokio::test]
async fn health_reports_ok() {
    let app = make_test_router();
    let resp = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = make_test_router();
    let resp = send(&app, Method::GET, "/openapi.json", None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = json_body(resp).await;
    assert_eq!(doc["info"]["title"], "Folio API");
    assert!(doc["paths"]["/api/v1/articles/{id}/archive"]["post"].is_object());
    assert!(doc["components"]["schemas"]["ErrorResponse"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearerAuth"].is_object());
}
