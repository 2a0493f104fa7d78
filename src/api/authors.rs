//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor, UpdateAuthor},
};

use super::{ListQuery, RespuestaAPI};

/// List authors
#[utoipa::path(
    get,
    path = "/autores",
    tag = "autores",
    params(ListQuery),
    responses(
        (status = 200, description = "List of authors", body = [Author])
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.authors.list(query.skip, query.limit).await?;
    Ok(Json(authors))
}

/// Get an author by ID
#[utoipa::path(
    get,
    path = "/autores/{id}",
    tag = "autores",
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get(id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/autores",
    tag = "autores",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.services.authors.create(data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Update an existing author
#[utoipa::path(
    put,
    path = "/autores/{id}",
    tag = "autores",
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.update(id, data).await?;
    Ok(Json(author))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/autores/{id}",
    tag = "autores",
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted", body = RespuestaAPI),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.authors.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Author deleted successfully")))
}
