//! Magazine endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::magazine::{CreateMagazine, Magazine, UpdateMagazine},
};

use super::{ListQuery, RespuestaAPI};

/// List magazines
#[utoipa::path(
    get,
    path = "/revistas",
    tag = "revistas",
    params(ListQuery),
    responses(
        (status = 200, description = "List of magazines", body = [Magazine])
    )
)]
pub async fn list_magazines(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Magazine>>> {
    let magazines = state
        .services
        .magazines
        .list(query.skip, query.limit)
        .await?;
    Ok(Json(magazines))
}

/// Get a magazine by ID
#[utoipa::path(
    get,
    path = "/revistas/{id}",
    tag = "revistas",
    params(
        ("id" = Uuid, Path, description = "Magazine ID")
    ),
    responses(
        (status = 200, description = "Magazine details", body = Magazine),
        (status = 404, description = "Magazine not found")
    )
)]
pub async fn get_magazine(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Magazine>> {
    let magazine = state.services.magazines.get(id).await?;
    Ok(Json(magazine))
}

/// Create a new magazine
#[utoipa::path(
    post,
    path = "/revistas",
    tag = "revistas",
    request_body = CreateMagazine,
    responses(
        (status = 201, description = "Magazine created", body = Magazine),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_magazine(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMagazine>,
) -> AppResult<(StatusCode, Json<Magazine>)> {
    let magazine = state.services.magazines.create(data).await?;
    Ok((StatusCode::CREATED, Json(magazine)))
}

/// Update an existing magazine
#[utoipa::path(
    put,
    path = "/revistas/{id}",
    tag = "revistas",
    params(
        ("id" = Uuid, Path, description = "Magazine ID")
    ),
    request_body = UpdateMagazine,
    responses(
        (status = 200, description = "Magazine updated", body = Magazine),
        (status = 404, description = "Magazine not found")
    )
)]
pub async fn update_magazine(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateMagazine>,
) -> AppResult<Json<Magazine>> {
    let magazine = state.services.magazines.update(id, data).await?;
    Ok(Json(magazine))
}

/// Delete a magazine
#[utoipa::path(
    delete,
    path = "/revistas/{id}",
    tag = "revistas",
    params(
        ("id" = Uuid, Path, description = "Magazine ID")
    ),
    responses(
        (status = 200, description = "Magazine deleted", body = RespuestaAPI),
        (status = 404, description = "Magazine not found")
    )
)]
pub async fn delete_magazine(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.magazines.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Magazine deleted successfully")))
}
