//! Items repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{ItemCondition, MaterialKind},
        item::{CreateItem, ItemQuery, ItemRow, UpdateItem},
        material::MaterialRef,
    },
};

#[derive(Clone)]
pub struct ItemsRepository {
    pool: Pool<Postgres>,
}

impl ItemsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get item by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ItemRow> {
        sqlx::query_as::<_, ItemRow>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
    }

    /// Check if a barcode is already registered
    pub async fn barcode_exists(
        &self,
        codigo_barras: &str,
        exclude_id: Option<Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM items WHERE codigo_barras = $1 AND id != $2)",
            )
            .bind(codigo_barras)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE codigo_barras = $1)")
                .bind(codigo_barras)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// List items with optional material and availability filters
    pub async fn list(&self, query: &ItemQuery) -> AppResult<Vec<ItemRow>> {
        let skip = query.skip.unwrap_or(0);
        let limit = query.limit.unwrap_or(1000);

        let mut conditions = Vec::new();
        let mut params: Vec<Uuid> = Vec::new();

        if query.solo_disponibles.unwrap_or(false) {
            conditions.push("disponible = TRUE".to_string());
        }
        // Material filters are alternatives; the first one present wins
        if let Some(id) = query.id_libro {
            params.push(id);
            conditions.push(format!("id_libro = ${}", params.len()));
        } else if let Some(id) = query.id_revista {
            params.push(id);
            conditions.push(format!("id_revista = ${}", params.len()));
        } else if let Some(id) = query.id_periodico {
            params.push(id);
            conditions.push(format!("id_periodico = ${}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_query = format!(
            "SELECT * FROM items {} ORDER BY fecha_creacion LIMIT {} OFFSET {}",
            where_clause, limit, skip
        );

        let mut builder = sqlx::query_as::<_, ItemRow>(&select_query);
        for param in &params {
            builder = builder.bind(param);
        }
        let items = builder.fetch_all(&self.pool).await?;

        Ok(items)
    }

    /// List the items of one bibliographic material
    pub async fn list_by_material(
        &self,
        kind: MaterialKind,
        material_id: Uuid,
        solo_disponibles: bool,
    ) -> AppResult<Vec<ItemRow>> {
        let column = match kind {
            MaterialKind::Book => "id_libro",
            MaterialKind::Magazine => "id_revista",
            MaterialKind::Newspaper => "id_periodico",
        };

        let mut select_query = format!("SELECT * FROM items WHERE {} = $1", column);
        if solo_disponibles {
            select_query.push_str(" AND disponible = TRUE");
        }
        select_query.push_str(" ORDER BY fecha_creacion");

        let items = sqlx::query_as::<_, ItemRow>(&select_query)
            .bind(material_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    /// Create a new item
    pub async fn create(
        &self,
        item: &CreateItem,
        material: &MaterialRef,
        estado_fisico: ItemCondition,
    ) -> AppResult<ItemRow> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO items (
                id_libro, id_revista, id_periodico, codigo_barras, ubicacion,
                estado_fisico, disponible, observaciones,
                id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(material.book_id())
        .bind(material.magazine_id())
        .bind(material.newspaper_id())
        .bind(&item.codigo_barras)
        .bind(&item.ubicacion)
        .bind(estado_fisico)
        .bind(item.disponible)
        .bind(&item.observaciones)
        .bind(item.id_usuario_creacion.as_uuid())
        .bind(item.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing item
    ///
    /// Material reference columns are never touched here; updates that try to
    /// move an item to another material are rejected upstream.
    pub async fn update(
        &self,
        id: Uuid,
        item: &UpdateItem,
        estado_fisico: Option<ItemCondition>,
    ) -> AppResult<ItemRow> {
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

        add_field!(item.codigo_barras, "codigo_barras");
        add_field!(item.ubicacion, "ubicacion");
        add_field!(estado_fisico, "estado_fisico");
        add_field!(item.disponible, "disponible");
        add_field!(item.observaciones, "observaciones");

        let query = format!(
            "UPDATE items SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(item.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(item.codigo_barras);
        bind_field!(item.ubicacion);
        bind_field!(estado_fisico);
        bind_field!(item.disponible);
        bind_field!(item.observaciones);

        builder.bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Delete an item
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Item with id {} not found", id)));
        }

        Ok(())
    }
}
