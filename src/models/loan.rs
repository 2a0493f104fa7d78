//! Loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::audit::ActorId;
use crate::models::enums::LoanState;

/// Full loan model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: Uuid,
    pub id_item: Uuid,
    pub id_usuario: Uuid,
    pub fecha_prestamo: DateTime<Utc>,
    pub fecha_devolucion_estimada: DateTime<Utc>,
    pub fecha_devolucion_real: Option<DateTime<Utc>>,
    pub estado: LoanState,
    #[serde(skip_serializing)]
    pub id_usuario_creacion: Option<Uuid>,
    #[serde(skip_serializing)]
    pub id_usuario_edicion: Option<Uuid>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

/// Create loan request
///
/// `fecha_devolucion_estimada` is taken as a raw string because the wire
/// contract accepts both offset-annotated and naive timestamps; parsing is
/// done by the loan service. When omitted it defaults to now + 15 days.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub id_item: Uuid,
    pub id_usuario: Uuid,
    pub id_usuario_creacion: ActorId,
    pub fecha_devolucion_estimada: Option<String>,
}

/// Update loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLoan {
    pub fecha_devolucion_estimada: Option<String>,
    pub fecha_devolucion_real: Option<String>,
    pub estado: Option<String>,
    pub id_usuario_edicion: ActorId,
}

/// Body of the return action
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReturnLoan {
    pub id_usuario_edicion: ActorId,
}

/// Loan list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct LoanQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub estado: Option<String>,
    pub id_usuario: Option<Uuid>,
}
