//! Magazine catalog operations

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::magazine::{CreateMagazine, Magazine, UpdateMagazine};
use crate::repository::Repository;
use crate::services::{check_catalog_references, normalize_optional, pagination};

#[derive(Clone)]
pub struct MagazinesService {
    repository: Repository,
}

impl MagazinesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Magazine> {
        self.repository.magazines.get_by_id(id).await
    }

    pub async fn list(&self, skip: Option<i64>, limit: Option<i64>) -> AppResult<Vec<Magazine>> {
        let (skip, limit) = pagination(skip, limit)?;
        self.repository.magazines.list(skip, limit).await
    }

    pub async fn create(&self, mut data: CreateMagazine) -> AppResult<Magazine> {
        data.titulo = data.titulo.trim().to_string();
        if data.titulo.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        data.numero_publicacion = normalize_optional(data.numero_publicacion);
        data.validate()?;

        check_catalog_references(
            &self.repository,
            Some(data.id_autor),
            Some(data.id_editorial),
            data.id_categoria,
        )
        .await?;

        self.repository.magazines.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateMagazine) -> AppResult<Magazine> {
        self.repository.magazines.get_by_id(id).await?;

        if let Some(titulo) = data.titulo.take() {
            let titulo = titulo.trim().to_string();
            if titulo.is_empty() {
                return Err(AppError::Validation("Title is required".to_string()));
            }
            data.titulo = Some(titulo);
        }

        data.numero_publicacion = normalize_optional(data.numero_publicacion);
        data.validate()?;

        check_catalog_references(
            &self.repository,
            data.id_autor,
            data.id_editorial,
            data.id_categoria,
        )
        .await?;

        self.repository.magazines.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.magazines.delete(id).await
    }
}
