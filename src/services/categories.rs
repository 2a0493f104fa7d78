//! Category catalog operations

use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::repository::Repository;
use crate::services::{normalize_optional, pagination};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    pub async fn list(&self, skip: Option<i64>, limit: Option<i64>) -> AppResult<Vec<Category>> {
        let (skip, limit) = pagination(skip, limit)?;
        self.repository.categories.list(skip, limit).await
    }

    pub async fn create(&self, mut data: CreateCategory) -> AppResult<Category> {
        data.nombre = data.nombre.trim().to_string();
        if data.nombre.is_empty() {
            return Err(AppError::Validation(
                "Category name is required".to_string(),
            ));
        }

        if self
            .repository
            .categories
            .name_exists(&data.nombre, None)
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "A category named '{}' already exists",
                data.nombre
            )));
        }

        data.descripcion = normalize_optional(data.descripcion);
        data.validate()?;

        self.repository.categories.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateCategory) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await?;

        if let Some(nombre) = data.nombre.take() {
            let nombre = nombre.trim().to_string();
            if nombre.is_empty() {
                return Err(AppError::Validation(
                    "Category name is required".to_string(),
                ));
            }
            if self
                .repository
                .categories
                .name_exists(&nombre, Some(id))
                .await?
            {
                return Err(AppError::Duplicate(format!(
                    "A category named '{}' already exists",
                    nombre
                )));
            }
            data.nombre = Some(nombre);
        }

        data.descripcion = normalize_optional(data.descripcion);
        data.validate()?;

        self.repository.categories.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.categories.delete(id).await
    }
}
