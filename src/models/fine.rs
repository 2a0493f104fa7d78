//! Fine model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::audit::ActorId;
use crate::models::enums::FineState;

/// Full fine model from database
///
/// At most one fine exists per loan; `monto` is always strictly positive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fine {
    pub id: Uuid,
    pub id_prestamo: Uuid,
    pub id_usuario: Uuid,
    pub monto: Decimal,
    pub motivo: Option<String>,
    pub fecha_multa: DateTime<Utc>,
    pub fecha_pago: Option<DateTime<Utc>>,
    pub estado: FineState,
    #[serde(skip_serializing)]
    pub id_usuario_creacion: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Create fine request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFine {
    pub id_prestamo: Uuid,
    pub id_usuario: Uuid,
    pub monto: Decimal,
    #[validate(length(max = 255, message = "Reason must not exceed 255 characters"))]
    pub motivo: Option<String>,
    pub id_usuario_creacion: ActorId,
}

/// Update fine request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFine {
    pub monto: Option<Decimal>,
    #[validate(length(max = 255, message = "Reason must not exceed 255 characters"))]
    pub motivo: Option<String>,
    pub fecha_pago: Option<String>,
    pub estado: Option<String>,
    pub id_usuario_edicion: ActorId,
}

/// Body of the pay action
#[derive(Debug, Deserialize, ToSchema)]
pub struct PayFine {
    pub id_usuario_edicion: ActorId,
}

/// Fine list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct FineQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub estado: Option<String>,
    pub id_usuario: Option<Uuid>,
}
