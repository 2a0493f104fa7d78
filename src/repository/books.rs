//! Books repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM libros WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Get book by ID, returning None when absent
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM libros WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Check if a book exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM libros WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Check if an ISBN is already registered
    pub async fn isbn_exists(&self, isbn: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM libros WHERE isbn = $1 AND id != $2)")
                .bind(isbn)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM libros WHERE isbn = $1)")
                .bind(isbn)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// List books with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM libros ORDER BY fecha_creacion LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let now = Utc::now();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO libros (
                titulo, isbn, numero_paginas, id_editorial, id_autor, id_categoria,
                id_usuario_creacion, id_usuario_edicion, fecha_creacion
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&book.titulo)
        .bind(&book.isbn)
        .bind(&book.numero_paginas)
        .bind(book.id_editorial)
        .bind(book.id_autor)
        .bind(book.id_categoria)
        .bind(book.id_usuario_creacion.as_uuid())
        .bind(book.id_usuario_creacion.as_uuid())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing book
    pub async fn update(&self, id: Uuid, book: &UpdateBook) -> AppResult<Book> {
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

        add_field!(book.titulo, "titulo");
        add_field!(book.isbn, "isbn");
        add_field!(book.numero_paginas, "numero_paginas");
        add_field!(book.id_editorial, "id_editorial");
        add_field!(book.id_autor, "id_autor");
        add_field!(book.id_categoria, "id_categoria");

        let query = format!(
            "UPDATE libros SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query)
            .bind(now)
            .bind(book.id_usuario_edicion.as_uuid());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(book.titulo);
        bind_field!(book.isbn);
        bind_field!(book.numero_paginas);
        bind_field!(book.id_editorial);
        bind_field!(book.id_autor);
        bind_field!(book.id_categoria);

        builder.bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Delete a book (its items are removed by the foreign key cascade)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM libros WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }
}
