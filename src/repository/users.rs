//! Users repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by username (primary authentication method)
    pub async fn get_by_username(&self, nombre_usuario: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM usuarios WHERE LOWER(nombre_usuario) = LOWER($1)",
        )
        .bind(nombre_usuario)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by email (login fallback)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    /// Check if a user exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM usuarios WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Check if a username already exists
    pub async fn username_exists(
        &self,
        nombre_usuario: &str,
        exclude_id: Option<Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM usuarios WHERE LOWER(nombre_usuario) = LOWER($1) AND id != $2)",
            )
            .bind(nombre_usuario)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM usuarios WHERE LOWER(nombre_usuario) = LOWER($1))",
            )
            .bind(nombre_usuario)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(exists)
    }

    /// Check if an email already exists
    pub async fn email_exists(&self, email: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM usuarios WHERE LOWER(email) = LOWER($1) AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM usuarios WHERE LOWER(email) = LOWER($1))",
            )
            .bind(email)
            .fetch_one(&self.pool)
            .await?
        };
        Ok(exists)
    }

    /// List users with pagination, hiding deactivated accounts by default
    pub async fn list(
        &self,
        skip: i64,
        limit: i64,
        include_inactive: bool,
    ) -> AppResult<Vec<User>> {
        let select_query = if include_inactive {
            "SELECT * FROM usuarios ORDER BY fecha_creacion LIMIT $1 OFFSET $2"
        } else {
            "SELECT * FROM usuarios WHERE activo = TRUE ORDER BY fecha_creacion LIMIT $1 OFFSET $2"
        };

        let users = sqlx::query_as::<_, User>(select_query)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Create a new user
    pub async fn create(&self, user: &CreateUser, contrasena_hash: &str) -> AppResult<User> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO usuarios (
                nombre, nombre_usuario, email, contrasena_hash, telefono,
                activo, es_admin, id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&user.nombre)
        .bind(&user.nombre_usuario)
        .bind(&user.email)
        .bind(contrasena_hash)
        .bind(&user.telefono)
        .bind(user.es_admin)
        .bind(user.id_usuario_creacion.map(|a| a.as_uuid()))
        .bind(user.id_usuario_creacion.map(|a| a.as_uuid()))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing user
    pub async fn update(&self, id: Uuid, user: &UpdateUser) -> AppResult<User> {
        let now = Utc::now();
        let editor = user.id_usuario_edicion.map(|a| a.as_uuid());

        // Build dynamic update query
        let mut sets = vec!["fecha_actualizacion = $1".to_string()];
        let mut param_idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(user.nombre, "nombre");
        add_field!(user.nombre_usuario, "nombre_usuario");
        add_field!(user.email, "email");
        add_field!(user.telefono, "telefono");
        add_field!(user.es_admin, "es_admin");
        add_field!(user.activo, "activo");
        add_field!(editor, "id_usuario_edicion");

        let query = format!(
            "UPDATE usuarios SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(user.nombre);
        bind_field!(user.nombre_usuario);
        bind_field!(user.email);
        bind_field!(user.telefono);
        bind_field!(user.es_admin);
        bind_field!(user.activo);
        bind_field!(editor);

        let result = builder.bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Deactivate a user (soft delete)
    ///
    /// Deleting an already inactive user is a no-op.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let user = self.get_by_id(id).await?;

        if !user.activo {
            return Ok(());
        }

        let now = Utc::now();

        sqlx::query("UPDATE usuarios SET activo = FALSE, fecha_actualizacion = $1 WHERE id = $2")
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
