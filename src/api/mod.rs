//! API handlers for the Biblioteca REST endpoints

pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
pub mod fines;
pub mod health;
pub mod items;
pub mod loans;
pub mod magazines;
pub mod newspapers;
pub mod openapi;
pub mod publishers;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Pagination parameters shared by the plain list endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    pub skip: Option<i64>,
    /// Maximum rows to return (default 1000, at most 1000)
    pub limit: Option<i64>,
}

/// Success envelope for deletes and other entity-less responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RespuestaAPI {
    pub mensaje: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datos: Option<serde_json::Value>,
}

impl RespuestaAPI {
    pub fn ok(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
            success: true,
            datos: None,
        }
    }
}
