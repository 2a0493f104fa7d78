//! Newspaper model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;

/// Full newspaper model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Newspaper {
    pub id: Uuid,
    pub titulo: String,
    pub fecha_publicacion: DateTime<Utc>,
    pub id_editorial: Uuid,
    pub id_autor: Option<Uuid>,
    pub id_categoria: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_creacion: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Create newspaper request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNewspaper {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub titulo: String,
    pub fecha_publicacion: DateTime<Utc>,
    pub id_editorial: Uuid,
    pub id_autor: Uuid,
    pub id_categoria: Option<Uuid>,
    pub id_usuario_creacion: ActorId,
}

/// Update newspaper request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNewspaper {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub titulo: Option<String>,
    pub fecha_publicacion: Option<DateTime<Utc>>,
    pub id_editorial: Option<Uuid>,
    pub id_autor: Option<Uuid>,
    pub id_categoria: Option<Uuid>,
    pub id_usuario_edicion: ActorId,
}
