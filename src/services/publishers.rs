//! Publisher catalog operations

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::publisher::{CreatePublisher, Publisher, UpdatePublisher};
use crate::repository::Repository;
use crate::services::{normalize_optional, pagination};

#[derive(Clone)]
pub struct PublishersService {
    repository: Repository,
}

impl PublishersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Publisher> {
        self.repository.publishers.get_by_id(id).await
    }

    pub async fn list(&self, skip: Option<i64>, limit: Option<i64>) -> AppResult<Vec<Publisher>> {
        let (skip, limit) = pagination(skip, limit)?;
        self.repository.publishers.list(skip, limit).await
    }

    pub async fn create(&self, mut data: CreatePublisher) -> AppResult<Publisher> {
        data.nombre = data.nombre.trim().to_string();
        if data.nombre.is_empty() {
            return Err(AppError::Validation(
                "Publisher name is required".to_string(),
            ));
        }

        data.direccion = normalize_optional(data.direccion);
        data.telefono = normalize_optional(data.telefono);
        data.validate()?;

        self.repository.publishers.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdatePublisher) -> AppResult<Publisher> {
        self.repository.publishers.get_by_id(id).await?;

        if let Some(nombre) = data.nombre.take() {
            let nombre = nombre.trim().to_string();
            if nombre.is_empty() {
                return Err(AppError::Validation(
                    "Publisher name is required".to_string(),
                ));
            }
            data.nombre = Some(nombre);
        }

        data.direccion = normalize_optional(data.direccion);
        data.telefono = normalize_optional(data.telefono);
        data.validate()?;

        self.repository.publishers.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.publishers.delete(id).await
    }
}
