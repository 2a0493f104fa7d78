//! Publishers repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::publisher::{CreatePublisher, Publisher, UpdatePublisher},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get publisher by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM editoriales WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publisher with id {} not found", id)))
    }

    /// Check if a publisher exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM editoriales WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// List publishers with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT * FROM editoriales ORDER BY fecha_creacion LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }

    /// Create a new publisher
    pub async fn create(&self, publisher: &CreatePublisher) -> AppResult<Publisher> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO editoriales (
                nombre, direccion, telefono,
                id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&publisher.nombre)
        .bind(&publisher.direccion)
        .bind(&publisher.telefono)
        .bind(publisher.id_usuario_creacion.as_uuid())
        .bind(publisher.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing publisher
    pub async fn update(&self, id: Uuid, publisher: &UpdatePublisher) -> AppResult<Publisher> {
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

        add_field!(publisher.nombre, "nombre");
        add_field!(publisher.direccion, "direccion");
        add_field!(publisher.telefono, "telefono");

        let query = format!(
            "UPDATE editoriales SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(publisher.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(publisher.nombre);
        bind_field!(publisher.direccion);
        bind_field!(publisher.telefono);

        builder.bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Delete a publisher
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM editoriales WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Publisher with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
