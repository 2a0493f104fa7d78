//! Loan circulation operations
//!
//! The checks here give callers precise errors before the repository
//! takes its row locks; the repository re-checks availability inside the
//! transaction, so two concurrent checkouts of the same item cannot both
//! succeed.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::enums::LoanState;
use crate::models::loan::{CreateLoan, Loan, LoanQuery, ReturnLoan, UpdateLoan};
use crate::repository::Repository;
use crate::services::datetime::parse_datetime;
use crate::services::pagination;

/// Loan period granted when the caller does not pick a return date
const DEFAULT_LOAN_DAYS: i64 = 15;

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await
    }

    pub async fn list(&self, query: &LoanQuery) -> AppResult<Vec<Loan>> {
        let (skip, limit) = pagination(query.skip, query.limit)?;

        let estado = match query.estado.as_deref() {
            Some(raw) => Some(raw.trim().parse::<LoanState>().map_err(AppError::Validation)?),
            None => None,
        };

        self.repository
            .loans
            .list(skip, limit, estado, query.id_usuario)
            .await
    }

    pub async fn create(&self, data: CreateLoan) -> AppResult<Loan> {
        let item = match self.repository.items.get_by_id(data.id_item).await {
            Ok(item) => item,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Validation(format!(
                    "Item with id {} does not exist",
                    data.id_item
                )))
            }
            Err(err) => return Err(err),
        };

        if !item.disponible {
            return Err(AppError::Validation(
                "Item is not available for loan".to_string(),
            ));
        }

        if self
            .repository
            .loans
            .active_exists_for_item(data.id_item)
            .await?
        {
            return Err(AppError::Validation(
                "Item already has an active loan".to_string(),
            ));
        }

        let user = match self.repository.users.get_by_id(data.id_usuario).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::Validation(format!(
                    "User with id {} does not exist",
                    data.id_usuario
                )))
            }
            Err(err) => return Err(err),
        };

        if !user.activo {
            return Err(AppError::Validation("User is not active".to_string()));
        }

        let fecha_devolucion_estimada = resolve_due_date(&data)?;

        self.repository
            .loans
            .create(&data, fecha_devolucion_estimada)
            .await
    }

    pub async fn update(&self, id: Uuid, data: UpdateLoan) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await?;

        let fecha_devolucion_estimada = match data.fecha_devolucion_estimada.as_deref() {
            Some(raw) => {
                let parsed = parse_datetime("fecha_devolucion_estimada", raw)?;
                if parsed <= Utc::now() {
                    return Err(AppError::Validation(
                        "Estimated return date must be in the future".to_string(),
                    ));
                }
                Some(parsed)
            }
            None => None,
        };

        let fecha_devolucion_real = match data.fecha_devolucion_real.as_deref() {
            Some(raw) => Some(parse_datetime("fecha_devolucion_real", raw)?),
            None => None,
        };

        let estado = match data.estado.as_deref() {
            Some(raw) => Some(raw.trim().parse::<LoanState>().map_err(AppError::Validation)?),
            None => None,
        };

        self.repository
            .loans
            .update(
                id,
                fecha_devolucion_estimada,
                fecha_devolucion_real,
                estado,
                data.id_usuario_edicion.as_uuid(),
            )
            .await
    }

    /// Mark a loan returned and free its item
    pub async fn return_loan(&self, id: Uuid, data: ReturnLoan) -> AppResult<Loan> {
        self.repository
            .loans
            .return_loan(id, data.id_usuario_edicion.as_uuid())
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.loans.delete(id).await
    }
}

/// Apply the default loan period and reject due dates already in the past
fn resolve_due_date(data: &CreateLoan) -> AppResult<DateTime<Utc>> {
    let due = match data.fecha_devolucion_estimada.as_deref() {
        Some(raw) => parse_datetime("fecha_devolucion_estimada", raw)?,
        None => Utc::now() + Duration::days(DEFAULT_LOAN_DAYS),
    };

    if due <= Utc::now() {
        return Err(AppError::Validation(
            "Estimated return date must be in the future".to_string(),
        ));
    }

    Ok(due)
}
