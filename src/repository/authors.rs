//! Authors repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM autores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    /// Check if an author exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM autores WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// List authors with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT * FROM autores ORDER BY fecha_creacion LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Create a new author
    pub async fn create(&self, author: &CreateAuthor) -> AppResult<Author> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO autores (
                nombre, nacionalidad, bibliografia,
                id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&author.nombre)
        .bind(&author.nacionalidad)
        .bind(&author.bibliografia)
        .bind(author.id_usuario_creacion.as_uuid())
        .bind(author.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing author
    pub async fn update(&self, id: Uuid, author: &UpdateAuthor) -> AppResult<Author> {
        let now = Utc::now();

        // Build dynamic update query
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

        add_field!(author.nombre, "nombre");
        add_field!(author.nacionalidad, "nacionalidad");
        add_field!(author.bibliografia, "bibliografia");

        let query = format!(
            "UPDATE autores SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(author.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(author.nombre);
        bind_field!(author.nacionalidad);
        bind_field!(author.bibliografia);

        builder.bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Delete an author
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM autores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author with id {} not found", id)));
        }

        Ok(())
    }
}
