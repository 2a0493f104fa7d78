//! Categories repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CreateCategory, UpdateCategory},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM categorias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))
    }

    /// Check if a category exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categorias WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Check if a category name is already taken (case insensitive)
    pub async fn name_exists(&self, nombre: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM categorias WHERE LOWER(nombre) = LOWER($1) AND id != $2)",
            )
            .bind(nombre)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM categorias WHERE LOWER(nombre) = LOWER($1))",
            )
            .bind(nombre)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(exists)
    }

    /// List categories with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categorias ORDER BY fecha_creacion LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Create a new category
    pub async fn create(&self, category: &CreateCategory) -> AppResult<Category> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO categorias (
                nombre, descripcion,
                id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&category.nombre)
        .bind(&category.descripcion)
        .bind(category.id_usuario_creacion.as_uuid())
        .bind(category.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing category
    pub async fn update(&self, id: Uuid, category: &UpdateCategory) -> AppResult<Category> {
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

        add_field!(category.nombre, "nombre");
        add_field!(category.descripcion, "descripcion");

        let query = format!(
            "UPDATE categorias SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(category.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(category.nombre);
        bind_field!(category.descripcion);

        builder.bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Delete a category
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categorias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
