//! Author catalog operations

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::author::{Author, CreateAuthor, UpdateAuthor};
use crate::repository::Repository;
use crate::services::{normalize_optional, pagination};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    pub async fn list(&self, skip: Option<i64>, limit: Option<i64>) -> AppResult<Vec<Author>> {
        let (skip, limit) = pagination(skip, limit)?;
        self.repository.authors.list(skip, limit).await
    }

    pub async fn create(&self, mut data: CreateAuthor) -> AppResult<Author> {
        data.nombre = data.nombre.trim().to_string();
        if data.nombre.is_empty() {
            return Err(AppError::Validation("Author name is required".to_string()));
        }

        data.nacionalidad = data.nacionalidad.trim().to_string();
        if data.nacionalidad.is_empty() {
            return Err(AppError::Validation("Nationality is required".to_string()));
        }

        data.bibliografia = normalize_optional(data.bibliografia);
        data.validate()?;

        self.repository.authors.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateAuthor) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await?;

        if let Some(nombre) = data.nombre.take() {
            let nombre = nombre.trim().to_string();
            if nombre.is_empty() {
                return Err(AppError::Validation("Author name is required".to_string()));
            }
            data.nombre = Some(nombre);
        }

        if let Some(nacionalidad) = data.nacionalidad.take() {
            let nacionalidad = nacionalidad.trim().to_string();
            if nacionalidad.is_empty() {
                return Err(AppError::Validation("Nationality is required".to_string()));
            }
            data.nacionalidad = Some(nacionalidad);
        }

        data.bibliografia = normalize_optional(data.bibliografia);
        data.validate()?;

        self.repository.authors.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }
}
