//! Fine management operations

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::enums::FineState;
use crate::models::fine::{CreateFine, Fine, FineQuery, PayFine, UpdateFine};
use crate::repository::Repository;
use crate::services::datetime::parse_datetime;
use crate::services::{normalize_optional, pagination};

#[derive(Clone)]
pub struct FinesService {
    repository: Repository,
}

impl FinesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Fine> {
        self.repository.fines.get_by_id(id).await
    }

    pub async fn list(&self, query: &FineQuery) -> AppResult<Vec<Fine>> {
        let (skip, limit) = pagination(query.skip, query.limit)?;

        let estado = match query.estado.as_deref() {
            Some(raw) => Some(raw.trim().parse::<FineState>().map_err(AppError::Validation)?),
            None => None,
        };

        self.repository
            .fines
            .list(skip, limit, estado, query.id_usuario)
            .await
    }

    pub async fn create(&self, mut data: CreateFine) -> AppResult<Fine> {
        if data.monto <= Decimal::ZERO {
            return Err(AppError::Validation(
                "Fine amount must be greater than zero".to_string(),
            ));
        }

        match self.repository.loans.get_by_id(data.id_prestamo).await {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Validation(format!(
                    "Loan with id {} does not exist",
                    data.id_prestamo
                )))
            }
            Err(err) => return Err(err),
        }

        // One fine per loan; a repeat is a validation failure, not a conflict
        if self
            .repository
            .fines
            .exists_for_loan(data.id_prestamo)
            .await?
        {
            return Err(AppError::Validation(
                "A fine for this loan already exists".to_string(),
            ));
        }

        if !self.repository.users.exists(data.id_usuario).await? {
            return Err(AppError::Validation(format!(
                "User with id {} does not exist",
                data.id_usuario
            )));
        }

        data.motivo = normalize_optional(data.motivo);
        data.validate()?;

        self.repository.fines.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateFine) -> AppResult<Fine> {
        self.repository.fines.get_by_id(id).await?;

        if let Some(monto) = data.monto {
            if monto <= Decimal::ZERO {
                return Err(AppError::Validation(
                    "Fine amount must be greater than zero".to_string(),
                ));
            }
        }

        data.motivo = normalize_optional(data.motivo);
        data.validate()?;

        let fecha_pago = match data.fecha_pago.as_deref() {
            Some(raw) => Some(parse_datetime("fecha_pago", raw)?),
            None => None,
        };

        let estado = match data.estado.as_deref() {
            Some(raw) => Some(raw.trim().parse::<FineState>().map_err(AppError::Validation)?),
            None => None,
        };

        self.repository.fines.update(id, &data, fecha_pago, estado).await
    }

    /// Mark a fine paid, stamping the payment time server-side
    pub async fn pay(&self, id: Uuid, data: PayFine) -> AppResult<Fine> {
        self.repository
            .fines
            .pay(id, data.id_usuario_edicion.as_uuid())
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.fines.delete(id).await
    }
}
