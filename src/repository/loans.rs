//! Loans repository for database operations
//!
//! Loan writes that also touch item availability run inside a single
//! transaction so a crash can never leave an item checked out without a
//! matching open loan.

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::LoanState,
        loan::{CreateLoan, Loan},
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM prestamos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Check if an item currently has an open loan
    pub async fn active_exists_for_item(&self, id_item: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM prestamos WHERE id_item = $1 AND estado = 'activo')",
        )
        .bind(id_item)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// List loans with optional state and user filters
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        estado: Option<LoanState>,
        id_usuario: Option<Uuid>,
    ) -> AppResult<Vec<Loan>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<Uuid> = Vec::new();

        if let Some(estado) = estado {
            conditions.push(format!("estado = '{}'", estado.as_str()));
        }
        if let Some(id) = id_usuario {
            params.push(id);
            conditions.push(format!("id_usuario = ${}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_query = format!(
            "SELECT * FROM prestamos {} ORDER BY fecha_prestamo LIMIT {} OFFSET {}",
            where_clause, limit, skip
        );

        let mut builder = sqlx::query_as::<_, Loan>(&select_query);
        for param in &params {
            builder = builder.bind(param);
        }
        let loans = builder.fetch_all(&self.pool).await?;

        Ok(loans)
    }

    /// Create a loan and mark its item unavailable
    ///
    /// The item row is locked and availability re-checked inside the
    /// transaction, so two concurrent requests for the last copy cannot both
    /// succeed.
    pub async fn create(
        &self,
        loan: &CreateLoan,
        fecha_devolucion_estimada: DateTime<Utc>,
    ) -> AppResult<Loan> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let disponible: Option<bool> =
            sqlx::query_scalar("SELECT disponible FROM items WHERE id = $1 FOR UPDATE")
                .bind(loan.id_item)
                .fetch_optional(&mut *tx)
                .await?;

        match disponible {
            Some(true) => {}
            Some(false) => {
                return Err(AppError::Validation(
                    "Item is not available for loan".to_string(),
                ))
            }
            None => {
                return Err(AppError::Validation(format!(
                    "Item with id {} does not exist",
                    loan.id_item
                )))
            }
        }

        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO prestamos (
                id_item, id_usuario, fecha_prestamo, fecha_devolucion_estimada,
                estado, id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(loan.id_item)
        .bind(loan.id_usuario)
        .bind(now)
        .bind(fecha_devolucion_estimada)
        .bind(LoanState::Active)
        .bind(loan.id_usuario_creacion.as_uuid())
        .bind(loan.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE items SET disponible = FALSE, fecha_actualizacion = $1 WHERE id = $2")
            .bind(now)
            .bind(loan.id_item)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Close a loan and restore its item's availability
    ///
    /// The item may have been deleted while the loan was open, so the
    /// availability restore matches zero rows in that case and the return
    /// still succeeds.
    pub async fn return_loan(&self, id: Uuid, editor: Uuid) -> AppResult<Loan> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM prestamos WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))?;

        let returned = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE prestamos
            SET fecha_devolucion_real = $1, estado = $2, id_usuario_edicion = $3,
                fecha_actualizacion = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(now)
        .bind(LoanState::Returned)
        .bind(editor)
        .bind(now)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE items SET disponible = TRUE, fecha_actualizacion = $1 WHERE id = $2")
            .bind(now)
            .bind(loan.id_item)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(returned)
    }

    /// Update loan dates or state without touching item availability
    pub async fn update(
        &self,
        id: Uuid,
        fecha_devolucion_estimada: Option<DateTime<Utc>>,
        fecha_devolucion_real: Option<DateTime<Utc>>,
        estado: Option<LoanState>,
        editor: Uuid,
    ) -> AppResult<Loan> {
        let now = Utc::now();

        let mut sets = vec![
            "fecha_actualizacion = $1".to_string(),
            "id_usuario_edicion = $2".to_string(),
        ];
        let mut param_idx = 3;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(fecha_devolucion_estimada, "fecha_devolucion_estimada");
        add_field!(fecha_devolucion_real, "fecha_devolucion_real");
        add_field!(estado, "estado");

        let query = format!(
            "UPDATE prestamos SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query).bind(now).bind(editor);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(fecha_devolucion_estimada);
        bind_field!(fecha_devolucion_real);
        bind_field!(estado);

        let result = builder.bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Loan with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a loan, releasing its item if the loan was still open
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM prestamos WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))?;

        if loan.estado == LoanState::Active {
            sqlx::query(
                "UPDATE items SET disponible = TRUE, fecha_actualizacion = $1 WHERE id = $2",
            )
            .bind(now)
            .bind(loan.id_item)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM prestamos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
