//! User endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User, UserQuery},
};

use super::RespuestaAPI;

/// List users
///
/// Inactive users are hidden unless `include_inactive` is set.
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    params(UserQuery),
    responses(
        (status = 200, description = "List of users", body = [User])
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state
        .services
        .users
        .list(
            query.skip,
            query.limit,
            query.include_inactive.unwrap_or(false),
        )
        .await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "usuarios",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.services.users.create(data).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.services.users.update(id, data).await?;
    Ok(Json(user))
}

/// Deactivate a user
///
/// Users are never removed; the row is kept for loan and fine history.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deactivated", body = RespuestaAPI),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RespuestaAPI>> {
    state.services.users.delete(id).await?;
    Ok(Json(RespuestaAPI::ok("User deleted successfully")))
}
