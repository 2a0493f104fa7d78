//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::{ListQuery, RespuestaAPI};

/// List books
#[utoipa::path(
    get,
    path = "/libros",
    tag = "libros",
    params(ListQuery),
    responses(
        (status = 200, description = "List of books", body = [Book])
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list(query.skip, query.limit).await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/libros",
    tag = "libros",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found"),
        (status = 409, description = "ISBN already exists")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/libros/{id}",
    tag = "libros",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = RespuestaAPI),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.books.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("Book deleted successfully")))
}
