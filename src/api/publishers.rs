//! Publisher endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::publisher::{CreatePublisher, Publisher, UpdatePublisher},
};

use super::{ListQuery, RespuestaAPI};

/// List publishers
#[utoipa::path(
    get,
    path = "/editoriales",
    tag = "editoriales",
    params(ListQuery),
    responses(
        (status = 200, description = "List of publishers", body = [Publisher])
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Publisher>>> {
    let publishers = state
        .services
        .publishers
        .list(query.skip, query.limit)
        .await?;
    Ok(Json(publishers))
}

/// Get a publisher by ID
#[utoipa::path(
    get,
    path = "/editoriales/{id}",
    tag = "editoriales",
    params(
        ("id" = Uuid, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.publishers.get(id).await?;
    Ok(Json(publisher))
}

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/editoriales",
    tag = "editoriales",
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePublisher>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let publisher = state.services.publishers.create(data).await?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

/// Update an existing publisher
#[utoipa::path(
    put,
    path = "/editoriales/{id}",
    tag = "editoriales",
    params(
        ("id" = Uuid, Path, description = "Publisher ID")
    ),
    request_body = UpdatePublisher,
    responses(
        (status = 200, description = "Publisher updated", body = Publisher),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn update_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdatePublisher>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.publishers.update(id, data).await?;
    Ok(Json(publisher))
}

/// Delete a publisher
#[utoipa::path(
    delete,
    path = "/editoriales/{id}",
    tag = "editoriales",
    params(
        ("id" = Uuid, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Publisher deleted", body = RespuestaAPI),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.publishers.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Publisher deleted successfully")))
}
