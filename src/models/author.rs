//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub nombre: String,
    pub nacionalidad: String,
    pub bibliografia: Option<String>,
    #[serde(skip_serializing)]
    pub id_usuario_creacion: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: String,
    #[validate(length(max = 50, message = "Nationality must not exceed 50 characters"))]
    pub nacionalidad: String,
    #[validate(length(max = 500, message = "Biography must not exceed 500 characters"))]
    pub bibliografia: Option<String>,
    pub id_usuario_creacion: ActorId,
}

/// Update author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: Option<String>,
    #[validate(length(max = 50, message = "Nationality must not exceed 50 characters"))]
    pub nacionalidad: Option<String>,
    #[validate(length(max = 500, message = "Biography must not exceed 500 characters"))]
    pub bibliografia: Option<String>,
    pub id_usuario_edicion: ActorId,
}
