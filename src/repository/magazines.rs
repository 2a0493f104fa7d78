//! Magazines repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::magazine::{CreateMagazine, Magazine, UpdateMagazine},
};

#[derive(Clone)]
pub struct MagazinesRepository {
    pool: Pool<Postgres>,
}

impl MagazinesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get magazine by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Magazine> {
        sqlx::query_as::<_, Magazine>("SELECT * FROM revistas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Magazine with id {} not found", id)))
    }

    /// Get magazine by ID, returning None when absent
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Magazine>> {
        let magazine = sqlx::query_as::<_, Magazine>("SELECT * FROM revistas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(magazine)
    }

    /// Check if a magazine exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM revistas WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// List magazines with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Magazine>> {
        let magazines = sqlx::query_as::<_, Magazine>(
            "SELECT * FROM revistas ORDER BY fecha_creacion LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(magazines)
    }

    /// Create a new magazine
    pub async fn create(&self, magazine: &CreateMagazine) -> AppResult<Magazine> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO revistas (
                titulo, numero_publicacion, id_editorial, id_autor, id_categoria,
                id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&magazine.titulo)
        .bind(&magazine.numero_publicacion)
        .bind(magazine.id_editorial)
        .bind(magazine.id_autor)
        .bind(magazine.id_categoria)
        .bind(magazine.id_usuario_creacion.as_uuid())
        .bind(magazine.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing magazine
    pub async fn update(&self, id: Uuid, magazine: &UpdateMagazine) -> AppResult<Magazine> {
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

        add_field!(magazine.titulo, "titulo");
        add_field!(magazine.numero_publicacion, "numero_publicacion");
        add_field!(magazine.id_editorial, "id_editorial");
        add_field!(magazine.id_autor, "id_autor");
        add_field!(magazine.id_categoria, "id_categoria");

        let query = format!(
            "UPDATE revistas SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(magazine.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(magazine.titulo);
        bind_field!(magazine.numero_publicacion);
        bind_field!(magazine.id_editorial);
        bind_field!(magazine.id_autor);
        bind_field!(magazine.id_categoria);

        builder.bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Delete a magazine (its items are removed by the foreign key cascade)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM revistas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Magazine with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
