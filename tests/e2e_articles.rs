use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;

use support::{
    ADMIN_TOKEN, AUTHOR_TOKEN, OTHER_AUTHOR_TOKEN, READER_TOKEN, assert_error_response,
    make_test_router, seed_article, seed_category, send, send_expect,
};

/// Authors create articles; the slug is derived from the title.
#[tokio::test]
async fn e2e_author_creates_article() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;

    let article = seed_article(&app, AUTHOR_TOKEN, "First Post", category).await;

    assert_eq!(article["slug"], "first-post");
    assert_eq!(article["author_id"], 2);
    assert_eq!(article["category_id"], category);
    assert_eq!(article["is_archived"], false);
    assert!(article["modified_on"].is_null());

    let id = article["id"].as_i64().unwrap();
    let fetched = send_expect(
        &app,
        Method::GET,
        &format!("/api/v1/articles/{id}"),
        None,
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(fetched["title"], "First Post");

    let by_slug = send_expect(
        &app,
        Method::GET,
        "/api/v1/articles/by-slug/first-post",
        None,
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(by_slug["id"], id);
}

/// Blank titles are rejected with 400.
#[tokio::test]
async fn e2e_blank_title_is_bad_request() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;

    let resp = send(
        &app,
        Method::POST,
        "/api/v1/articles",
        Some(AUTHOR_TOKEN),
        Some(json!({ "title": "   ", "content": "body", "category_id": category })),
    )
    .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// Readers hold no article capabilities.
#[tokio::test]
async fn e2e_reader_cannot_create() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;

    let resp = send(
        &app,
        Method::POST,
        "/api/v1/articles",
        Some(READER_TOKEN),
        Some(support::article_payload("Nope", category)),
    )
    .await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

/// PUT replaces the article; only the owner or an admin may do it.
#[tokio::test]
async fn e2e_update_respects_ownership() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;
    let article = seed_article(&app, AUTHOR_TOKEN, "Owned", category).await;
    let uri = format!("/api/v1/articles/{}", article["id"]);

    let replacement = json!({
        "title": "Owned (edited)",
        "introduction": "",
        "content": "rewritten",
        "category_id": category,
        "is_archived": false,
        "is_published": true
    });

    let resp = send(
        &app,
        Method::PUT,
        &uri,
        Some(OTHER_AUTHOR_TOKEN),
        Some(replacement.clone()),
    )
    .await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;

    let updated = send_expect(
        &app,
        Method::PUT,
        &uri,
        Some(ADMIN_TOKEN),
        Some(replacement),
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["title"], "Owned (edited)");
    assert_eq!(updated["slug"], "owned-(edited)");
    assert_eq!(updated["introduction"], "");
    assert_eq!(updated["is_published"], true);
    assert!(updated["published_on"].is_string());
    assert!(updated["modified_on"].is_string());
}

/// Archived articles disappear for the public but stay visible to their author.
#[tokio::test]
async fn e2e_archived_article_visibility() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;
    let article = seed_article(&app, AUTHOR_TOKEN, "Old News", category).await;
    let id = article["id"].as_i64().unwrap();

    let archived = send_expect(
        &app,
        Method::POST,
        &format!("/api/v1/articles/{id}/archive"),
        Some(AUTHOR_TOKEN),
        Some(json!({ "archived": true })),
        StatusCode::OK,
    )
    .await;
    assert_eq!(archived["is_archived"], true);

    let uri = format!("/api/v1/articles/{id}");
    let resp = send(&app, Method::GET, &uri, None, None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    let resp = send(&app, Method::GET, &uri, Some(READER_TOKEN), None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    send_expect(&app, Method::GET, &uri, Some(AUTHOR_TOKEN), None, StatusCode::OK).await;

    let public = send_expect(&app, Method::GET, "/api/v1/articles", None, None, StatusCode::OK).await;
    assert_eq!(public["items"].as_array().unwrap().len(), 0);

    let resp = send(
        &app,
        Method::GET,
        "/api/v1/articles?include_archived=true",
        None,
        None,
    )
    .await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;

    let all = send_expect(
        &app,
        Method::GET,
        "/api/v1/articles?include_archived=true",
        Some(ADMIN_TOKEN),
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(all["items"].as_array().unwrap().len(), 1);
}

/// Keyset pagination walks every article exactly once, newest first.
#[tokio::test]
async fn e2e_list_paginates_with_cursor() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;
    for title in ["One", "Two", "Three"] {
        seed_article(&app, AUTHOR_TOKEN, title, category).await;
    }

    let first = send_expect(
        &app,
        Method::GET,
        "/api/v1/articles?limit=2",
        None,
        None,
        StatusCode::OK,
    )
    .await;
    let items = first["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Three");
    assert_eq!(first["has_more"], true);
    let cursor = first["next_cursor"].as_str().unwrap();

    let second = send_expect(
        &app,
        Method::GET,
        &format!("/api/v1/articles?limit=2&cursor={cursor}"),
        None,
        None,
        StatusCode::OK,
    )
    .await;
    let items = second["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "One");
    assert_eq!(second["has_more"], false);
    assert!(second.get("next_cursor").is_none());
}

/// Search and filters narrow the listing.
#[tokio::test]
async fn e2e_list_filters_by_search_category_and_author() {
    let app = make_test_router();
    let news = seed_category(&app, "News").await;
    let sports = seed_category(&app, "Sports").await;
    seed_article(&app, AUTHOR_TOKEN, "Rust Release", news).await;
    seed_article(&app, OTHER_AUTHOR_TOKEN, "Football Final", sports).await;

    let found = send_expect(
        &app,
        Method::GET,
        "/api/v1/articles?q=rust",
        None,
        None,
        StatusCode::OK,
    )
    .await;
    let items = found["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Rust Release");

    let in_sports = send_expect(
        &app,
        Method::GET,
        &format!("/api/v1/articles?category_id={sports}"),
        None,
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(in_sports["items"][0]["title"], "Football Final");

    let by_author = send_expect(
        &app,
        Method::GET,
        "/api/v1/articles?author_id=3",
        None,
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(by_author["items"].as_array().unwrap().len(), 1);
    assert_eq!(by_author["items"][0]["author_id"], 3);
}

/// Deleting removes the article for everyone.
#[tokio::test]
async fn e2e_owner_deletes_article() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;
    let article = seed_article(&app, AUTHOR_TOKEN, "Short Lived", category).await;
    let uri = format!("/api/v1/articles/{}", article["id"]);

    let resp = send(&app, Method::DELETE, &uri, Some(OTHER_AUTHOR_TOKEN), None).await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;

    let body = send_expect(&app, Method::DELETE, &uri, Some(AUTHOR_TOKEN), None, StatusCode::OK).await;
    assert_eq!(body["status"], "deleted");

    let resp = send(&app, Method::GET, &uri, Some(ADMIN_TOKEN), None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// PUT is a complete replacement: a body without the archival flag is
/// rejected instead of silently restoring the article.
#[tokio::test]
async fn e2e_update_requires_archival_flag() {
    let app = make_test_router();
    let category = seed_category(&app, "News").await;
    let article = seed_article(&app, AUTHOR_TOKEN, "Shelved", category).await;
    let uri = format!("/api/v1/articles/{}", article["id"]);

    send_expect(
        &app,
        Method::POST,
        &format!("{uri}/archive"),
        Some(AUTHOR_TOKEN),
        Some(json!({ "archived": true })),
        StatusCode::OK,
    )
    .await;

    let resp = send(
        &app,
        Method::PUT,
        &uri,
        Some(AUTHOR_TOKEN),
        Some(json!({
            "title": "Shelved",
            "introduction": "",
            "content": "still shelved",
            "category_id": category
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let current = send_expect(&app, Method::GET, &uri, Some(AUTHOR_TOKEN), None, StatusCode::OK).await;
    assert_eq!(current["is_archived"], true);
    assert_eq!(current["content"], "Shelved body text");
}
