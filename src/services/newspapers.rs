//! Newspaper catalog operations

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::newspaper::{CreateNewspaper, Newspaper, UpdateNewspaper};
use crate::repository::Repository;
use crate::services::{check_catalog_references, pagination};

#[derive(Clone)]
pub struct NewspapersService {
    repository: Repository,
}

impl NewspapersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Newspaper> {
        self.repository.newspapers.get_by_id(id).await
    }

    pub async fn list(&self, skip: Option<i64>, limit: Option<i64>) -> AppResult<Vec<Newspaper>> {
        let (skip, limit) = pagination(skip, limit)?;
        self.repository.newspapers.list(skip, limit).await
    }

    pub async fn create(&self, mut data: CreateNewspaper) -> AppResult<Newspaper> {
        data.titulo = data.titulo.trim().to_string();
        if data.titulo.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        data.validate()?;

        check_catalog_references(
            &self.repository,
            Some(data.id_autor),
            Some(data.id_editorial),
            data.id_categoria,
        )
        .await?;

        self.repository.newspapers.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateNewspaper) -> AppResult<Newspaper> {
        self.repository.newspapers.get_by_id(id).await?;

        if let Some(titulo) = data.titulo.take() {
            let titulo = titulo.trim().to_string();
            if titulo.is_empty() {
                return Err(AppError::Validation("Title is required".to_string()));
            }
            data.titulo = Some(titulo);
        }

        data.validate()?;

        check_catalog_references(
            &self.repository,
            data.id_autor,
            data.id_editorial,
            data.id_categoria,
        )
        .await?;

        self.repository.newspapers.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.newspapers.delete(id).await
    }
}
