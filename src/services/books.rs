//! Book catalog operations

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::book::{Book, CreateBook, UpdateBook};
use crate::repository::Repository;
use crate::services::{check_catalog_references, normalize_optional, pagination};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn list(&self, skip: Option<i64>, limit: Option<i64>) -> AppResult<Vec<Book>> {
        let (skip, limit) = pagination(skip, limit)?;
        self.repository.books.list(skip, limit).await
    }

    pub async fn create(&self, mut data: CreateBook) -> AppResult<Book> {
        data.titulo = data.titulo.trim().to_string();
        if data.titulo.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        data.isbn = normalize_optional(data.isbn);
        if let Some(isbn) = &data.isbn {
            if self.repository.books.isbn_exists(isbn, None).await? {
                return Err(AppError::Duplicate(format!(
                    "A book with ISBN '{}' already exists",
                    isbn
                )));
            }
        }

        data.numero_paginas = normalize_optional(data.numero_paginas);
        data.validate()?;

        check_catalog_references(
            &self.repository,
            Some(data.id_autor),
            Some(data.id_editorial),
            data.id_categoria,
        )
        .await?;

        self.repository.books.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateBook) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await?;

        if let Some(titulo) = data.titulo.take() {
            let titulo = titulo.trim().to_string();
            if titulo.is_empty() {
                return Err(AppError::Validation("Title is required".to_string()));
            }
            data.titulo = Some(titulo);
        }

        data.isbn = normalize_optional(data.isbn);
        if let Some(isbn) = &data.isbn {
            if self.repository.books.isbn_exists(isbn, Some(id)).await? {
                return Err(AppError::Duplicate(format!(
                    "A book with ISBN '{}' already exists",
                    isbn
                )));
            }
        }

        data.numero_paginas = normalize_optional(data.numero_paginas);
        data.validate()?;

        check_catalog_references(
            &self.repository,
            data.id_autor,
            data.id_editorial,
            data.id_categoria,
        )
        .await?;

        self.repository.books.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
