//! Category model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;

/// Full category model from database
///
/// Category names are globally unique (case-insensitive).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: Option<String>,
    #[serde(skip_serializing)]
    pub id_usuario_creacion: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Create category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub descripcion: Option<String>,
    pub id_usuario_creacion: ActorId,
}

/// Update category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: Option<String>,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub descripcion: Option<String>,
    pub id_usuario_edicion: ActorId,
}
