//! Category endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory, UpdateCategory},
};

use super::{ListQuery, RespuestaAPI};

/// List categories
#[utoipa::path(
    get,
    path = "/categorias",
    tag = "categorias",
    params(ListQuery),
    responses(
        (status = 200, description = "List of categories", body = [Category])
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state
        .services
        .categories
        .list(query.skip, query.limit)
        .await?;
    Ok(Json(categories))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categorias/{id}",
    tag = "categorias",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.get(id).await?;
    Ok(Json(category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categorias",
    tag = "categorias",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.services.categories.create(data).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update an existing category
#[utoipa::path(
    put,
    path = "/categorias/{id}",
    tag = "categorias",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.update(id, data).await?;
    Ok(Json(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categorias/{id}",
    tag = "categorias",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = RespuestaAPI),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.categories.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Category deleted successfully")))
}
