// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, EditCategoryCommand},
    dto::CategoryDto,
    queries::categories::{GetCategoryQuery, ListCategoriesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    #[serde(default)]
    pub include_archived: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub category_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub category_name: String,
    pub is_archived: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CategoryListParams),
    responses(
        (status = 200, description = "Categories ordered by name.", body = [CategoryDto]),
        (status = 403, description = "Archived listing requested without permission.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<CategoryListParams>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories(
            actor.0.as_ref(),
            ListCategoriesQuery {
                include_archived: params.include_archived,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "Unknown or hidden category.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category(actor.0.as_ref(), GetCategoryQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Blank name.", body = ErrorResponse),
        (status = 403, description = "Caller may not manage categories.", body = ErrorResponse),
        (status = 409, description = "Name already taken.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let category = state
        .services
        .category_commands
        .create_category(
            &user,
            CreateCategoryCommand {
                category_name: payload.category_name,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 400, description = "Blank name.", body = ErrorResponse),
        (status = 403, description = "Caller may not manage categories.", body = ErrorResponse),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Name clash or concurrent modification.", body = ErrorResponse),
        (status = 422, description = "Body is missing the name or the archival flag.")
    ),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = EditCategoryCommand {
        id,
        category_name: payload.category_name,
        is_archived: payload.is_archived,
    };

    state
        .services
        .category_commands
        .edit_category(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted.", body = StatusResponse),
        (status = 403, description = "Caller may not manage categories.", body = ErrorResponse),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Articles still reference the category.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .category_commands
        .delete_category(&user, DeleteCategoryCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
