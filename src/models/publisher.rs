//! Publisher model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;

/// Full publisher model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: Uuid,
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    #[serde(skip_serializing)]
    pub id_usuario_creacion: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Create publisher request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePublisher {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: String,
    #[validate(length(max = 255, message = "Address must not exceed 255 characters"))]
    pub direccion: Option<String>,
    #[validate(length(max = 20, message = "Phone must not exceed 20 characters"))]
    pub telefono: Option<String>,
    pub id_usuario_creacion: ActorId,
}

/// Update publisher request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePublisher {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub nombre: Option<String>,
    #[validate(length(max = 255, message = "Address must not exceed 255 characters"))]
    pub direccion: Option<String>,
    #[validate(length(max = 20, message = "Phone must not exceed 20 characters"))]
    pub telefono: Option<String>,
    pub id_usuario_edicion: ActorId,
}
