//! Newspapers repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::newspaper::{CreateNewspaper, Newspaper, UpdateNewspaper},
};

#[derive(Clone)]
pub struct NewspapersRepository {
    pool: Pool<Postgres>,
}

impl NewspapersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get newspaper by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Newspaper> {
        sqlx::query_as::<_, Newspaper>("SELECT * FROM periodicos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Newspaper with id {} not found", id)))
    }

    /// Get newspaper by ID, returning None when absent
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Newspaper>> {
        let newspaper = sqlx::query_as::<_, Newspaper>("SELECT * FROM periodicos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(newspaper)
    }

    /// Check if a newspaper exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM periodicos WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// List newspapers with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Newspaper>> {
        let newspapers = sqlx::query_as::<_, Newspaper>(
            "SELECT * FROM periodicos ORDER BY fecha_creacion LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(newspapers)
    }

    /// Create a new newspaper
    pub async fn create(&self, newspaper: &CreateNewspaper) -> AppResult<Newspaper> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO periodicos (
                titulo, fecha_publicacion, id_editorial, id_autor, id_categoria,
                id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&newspaper.titulo)
        .bind(newspaper.fecha_publicacion)
        .bind(newspaper.id_editorial)
        .bind(newspaper.id_autor)
        .bind(newspaper.id_categoria)
        .bind(newspaper.id_usuario_creacion.as_uuid())
        .bind(newspaper.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing newspaper
    pub async fn update(&self, id: Uuid, newspaper: &UpdateNewspaper) -> AppResult<Newspaper> {
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

        add_field!(newspaper.titulo, "titulo");
        add_field!(newspaper.fecha_publicacion, "fecha_publicacion");
        add_field!(newspaper.id_editorial, "id_editorial");
        add_field!(newspaper.id_autor, "id_autor");
        add_field!(newspaper.id_categoria, "id_categoria");

        let query = format!(
            "UPDATE periodicos SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(newspaper.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(newspaper.titulo);
        bind_field!(newspaper.fecha_publicacion);
        bind_field!(newspaper.id_editorial);
        bind_field!(newspaper.id_autor);
        bind_field!(newspaper.id_categoria);

        builder.bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Delete a newspaper (its items are removed by the foreign key cascade)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM periodicos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Newspaper with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
