//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;

/// Full book model from database
///
/// `id_autor` is nullable in storage for rows that predate the author
/// requirement; creation always demands one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub titulo: String,
    /// ISBN, unique when present
    pub isbn: Option<String>,
    pub numero_paginas: Option<String>,
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

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub titulo: String,
    #[validate(length(max = 20, message = "ISBN must not exceed 20 characters"))]
    pub isbn: Option<String>,
    #[validate(length(max = 10, message = "Page count must not exceed 10 characters"))]
    pub numero_paginas: Option<String>,
    pub id_editorial: Uuid,
    pub id_autor: Uuid,
    pub id_categoria: Option<Uuid>,
    pub id_usuario_creacion: ActorId,
}

/// Update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(max = 255, message = "Title must not exceed 255 characters"))]
    pub titulo: Option<String>,
    #[validate(length(max = 20, message = "ISBN must not exceed 20 characters"))]
    pub isbn: Option<String>,
    #[validate(length(max = 10, message = "Page count must not exceed 10 characters"))]
    pub numero_paginas: Option<String>,
    pub id_editorial: Option<Uuid>,
    pub id_autor: Option<Uuid>,
    pub id_categoria: Option<Uuid>,
    pub id_usuario_edicion: ActorId,
}
