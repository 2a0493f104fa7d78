//! Fines repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::FineState,
        fine::{CreateFine, Fine, UpdateFine},
    },
};

#[derive(Clone)]
pub struct FinesRepository {
    pool: Pool<Postgres>,
}

impl FinesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get fine by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Fine> {
        sqlx::query_as::<_, Fine>("SELECT * FROM multas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fine with id {} not found", id)))
    }

    /// Check if a loan already carries a fine
    pub async fn exists_for_loan(&self, id_prestamo: Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM multas WHERE id_prestamo = $1)")
                .bind(id_prestamo)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// List fines with optional state and user filters
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        estado: Option<FineState>,
        id_usuario: Option<Uuid>,
    ) -> AppResult<Vec<Fine>> {
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
            "SELECT * FROM multas {} ORDER BY fecha_multa LIMIT {} OFFSET {}",
            where_clause, limit, skip
        );

        let mut builder = sqlx::query_as::<_, Fine>(&select_query);
        for param in &params {
            builder = builder.bind(param);
        }
        let fines = builder.fetch_all(&self.pool).await?;

        Ok(fines)
    }

    /// Create a new fine
    pub async fn create(&self, fine: &CreateFine) -> AppResult<Fine> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO multas (
                id_prestamo, id_usuario, monto, motivo, fecha_multa,
                estado, id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(fine.id_prestamo)
        .bind(fine.id_usuario)
        .bind(fine.monto)
        .bind(&fine.motivo)
        .bind(now)
        .bind(FineState::Pending)
        .bind(fine.id_usuario_creacion.as_uuid())
        .bind(fine.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing fine
    pub async fn update(
        &self,
        id: Uuid,
        fine: &UpdateFine,
        fecha_pago: Option<DateTime<Utc>>,
        estado: Option<FineState>,
    ) -> AppResult<Fine> {
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

        add_field!(fine.monto, "monto");
        add_field!(fine.motivo, "motivo");
        add_field!(fecha_pago, "fecha_pago");
        add_field!(estado, "estado");

        let query = format!(
            "UPDATE multas SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(fine.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(fine.monto);
        bind_field!(fine.motivo);
        bind_field!(fecha_pago);
        bind_field!(estado);

        let result = builder.bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Fine with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Mark a fine as paid, stamping the payment date
    pub async fn pay(&self, id: Uuid, editor: Uuid) -> AppResult<Fine> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE multas
            SET estado = $1, fecha_pago = $2, id_usuario_edicion = $3, fecha_actualizacion = $4
            WHERE id = $5
            "#,
        )
        .bind(FineState::Paid)
        .bind(now)
        .bind(editor)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Fine with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a fine
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM multas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Fine with id {} not found", id)));
        }

        Ok(())
    }
}
