//! Magazine model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;

/// Full magazine model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Magazine {
    pub id: Uuid,
    pub titulo: String,
    pub numero_publicacion: Option<String>,
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

/// Create magazine request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMagazine {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub titulo: String,
    #[validate(length(max = 50, message = "Publication number must not exceed 50 characters"))]
    pub numero_publicacion: Option<String>,
    pub id_editorial: Uuid,
    pub id_autor: Uuid,
    pub id_categoria: Option<Uuid>,
    pub id_usuario_creacion: ActorId,
}

/// Update magazine request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMagazine {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub titulo: Option<String>,
    #[validate(length(max = 50, message = "Publication number must not exceed 50 characters"))]
    pub numero_publicacion: Option<String>,
    pub id_editorial: Option<Uuid>,
    pub id_autor: Option<Uuid>,
    pub id_categoria: Option<Uuid>,
    pub id_usuario_edicion: ActorId,
}
