//! Authentication endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, LoginResponse, User},
};

use super::AuthenticatedUser;

/// Authenticate with username or email and obtain a JWT
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials or inactive user")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(login): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.services.users.authenticate(login).await?;
    Ok(Json(response))
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<User>> {
    let user_id = claims
        .user_id()
        .ok_or_else(|| AppError::Authentication("Invalid token subject".to_string()))?;

    let user = state.services.users.get(user_id).await?;
    Ok(Json(user))
}
