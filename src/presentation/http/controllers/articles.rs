// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, EditArticleCommand, SetArchiveStateCommand,
    },
    dto::{ArticleDto, CursorPage},
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::{ArticleListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    #[serde(default)]
    pub include_archived: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub author_id: Option<i64>,
    /// Case-insensitive substring matched against title, introduction and content.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub introduction: String,
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    /// Derived from the title when omitted.
    #[serde(default)]
    pub slug: Option<String>,
    pub category_id: i64,
}

/// Complete replacement of an article's editable state.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub introduction: String,
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    /// Kept when omitted, or regenerated if the title changed.
    #[serde(default)]
    pub slug: Option<String>,
    pub category_id: i64,
    pub is_archived: bool,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub published_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArchiveRequest {
    pub archived: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles, newest first.", body = ArticleListResponse),
        (status = 400, description = "Malformed cursor or filter.", body = ErrorResponse),
        (status = 403, description = "Archived listing requested without permission.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<CursorPage<ArticleDto>>> {
    let query = ListArticlesQuery {
        include_archived: params.include_archived,
        category_id: params.category_id,
        author_id: params.author_id,
        search: params.q,
        limit: params.limit,
        cursor: params.cursor,
    };

    state
        .services
        .article_queries
        .list_articles(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "Unknown or hidden article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(actor.0.as_ref(), GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "Unknown or hidden article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(actor.0.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Blank title or content, or unusable category.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Caller may not create articles.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        introduction: payload.introduction,
        content: payload.content,
        cover_image_url: payload.cover_image_url,
        slug: payload.slug,
        category_id: payload.category_id,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleDto),
        (status = 400, description = "Blank title or content, or unusable category.", body = ErrorResponse),
        (status = 403, description = "Caller may not edit this article.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse),
        (status = 409, description = "Concurrent modification or slug clash.", body = ErrorResponse),
        (status = 422, description = "Body is missing part of the article state.")
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = EditArticleCommand {
        id,
        title: payload.title,
        introduction: payload.introduction,
        content: payload.content,
        cover_image_url: payload.cover_image_url,
        slug: payload.slug,
        category_id: payload.category_id,
        is_archived: payload.is_archived,
        published_on: payload.published_on,
        is_published: payload.is_published,
    };

    state
        .services
        .article_commands
        .edit_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/archive",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArchiveRequest,
    responses(
        (status = 200, description = "Archive flag updated.", body = ArticleDto),
        (status = 403, description = "Caller may not edit this article.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn set_archive_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ArchiveRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = SetArchiveStateCommand {
        id,
        archived: payload.archived,
    };

    state
        .services
        .article_commands
        .set_archive_state(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 403, description = "Caller may not delete this article.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
