//! Newspaper endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::newspaper::{CreateNewspaper, Newspaper, UpdateNewspaper},
};

use super::{ListQuery, RespuestaAPI};

/// List newspapers
#[utoipa::path(
    get,
    path = "/periodicos",
    tag = "periodicos",
    params(ListQuery),
    responses(
        (status = 200, description = "List of newspapers", body = [Newspaper])
    )
)]
pub async fn list_newspapers(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Newspaper>>> {
    let newspapers = state
        .services
        .newspapers
        .list(query.skip, query.limit)
        .await?;
    Ok(Json(newspapers))
}

/// Get a newspaper by ID
#[utoipa::path(
    get,
    path = "/periodicos/{id}",
    tag = "periodicos",
    params(
        ("id" = Uuid, Path, description = "Newspaper ID")
    ),
    responses(
        (status = 200, description = "Newspaper details", body = Newspaper),
        (status = 404, description = "Newspaper not found")
    )
)]
pub async fn get_newspaper(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Newspaper>> {
    let newspaper = state.services.newspapers.get(id).await?;
    Ok(Json(newspaper))
}

/// Create a new newspaper
#[utoipa::path(
    post,
    path = "/periodicos",
    tag = "periodicos",
    request_body = CreateNewspaper,
    responses(
        (status = 201, description = "Newspaper created", body = Newspaper),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_newspaper(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateNewspaper>,
) -> AppResult<(StatusCode, Json<Newspaper>)> {
    let newspaper = state.services.newspapers.create(data).await?;
    Ok((StatusCode::CREATED, Json(newspaper)))
}

/// Update an existing newspaper
#[utoipa::path(
    put,
    path = "/periodicos/{id}",
    tag = "periodicos",
    params(
        ("id" = Uuid, Path, description = "Newspaper ID")
    ),
    request_body = UpdateNewspaper,
    responses(
        (status = 200, description = "Newspaper updated", body = Newspaper),
        (status = 404, description = "Newspaper not found")
    )
)]
pub async fn update_newspaper(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateNewspaper>,
) -> AppResult<Json<Newspaper>> {
    let newspaper = state.services.newspapers.update(id, data).await?;
    Ok(Json(newspaper))
}

/// Delete a newspaper
#[utoipa::path(
    delete,
    path = "/periodicos/{id}",
    tag = "periodicos",
    params(
        ("id" = Uuid, Path, description = "Newspaper ID")
    ),
    responses(
        (status = 200, description = "Newspaper deleted", body = RespuestaAPI),
        (status = 404, description = "Newspaper not found")
    )
)]
pub async fn delete_newspaper(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.newspapers.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Newspaper deleted successfully")))
}
