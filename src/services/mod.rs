//! Business logic layer
//!
//! Services own validation and the rules that span repositories. Handlers
//! call into this layer only; repositories never enforce business rules
//! beyond what the schema itself guarantees.

pub mod authors;
pub mod books;
pub mod categories;
pub mod datetime;
pub mod fines;
pub mod items;
pub mod loans;
pub mod magazines;
pub mod newspapers;
pub mod publishers;
pub mod users;

use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::repository::Repository;

/// Container for all business services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub users: users::UsersService,
    pub authors: authors::AuthorsService,
    pub publishers: publishers::PublishersService,
    pub categories: categories::CategoriesService,
    pub books: books::BooksService,
    pub magazines: magazines::MagazinesService,
    pub newspapers: newspapers::NewspapersService,
    pub items: items::ItemsService,
    pub loans: loans::LoansService,
    pub fines: fines::FinesService,
}

/// Normalise pagination parameters, enforcing the bounds the API documents
pub(crate) fn pagination(skip: Option<i64>, limit: Option<i64>) -> AppResult<(i64, i64)> {
    let skip = skip.unwrap_or(0);
    let limit = limit.unwrap_or(1000);

    if skip < 0 {
        return Err(AppError::Validation("skip must not be negative".to_string()));
    }
    if !(1..=1000).contains(&limit) {
        return Err(AppError::Validation(
            "limit must be between 1 and 1000".to_string(),
        ));
    }

    Ok((skip, limit))
}

/// Trim an optional text field, dropping it entirely when blank
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

/// Verify that every supplied catalog reference points at an existing row.
///
/// Materials (books, magazines, newspapers) all carry the same three
/// references, so the check lives here rather than in each service.
pub(crate) async fn check_catalog_references(
    repository: &Repository,
    id_autor: Option<Uuid>,
    id_editorial: Option<Uuid>,
    id_categoria: Option<Uuid>,
) -> AppResult<()> {
    if let Some(id) = id_autor {
        if !repository.authors.exists(id).await? {
            return Err(AppError::Validation(format!(
                "Author with id {} does not exist",
                id
            )));
        }
    }
    if let Some(id) = id_editorial {
        if !repository.publishers.exists(id).await? {
            return Err(AppError::Validation(format!(
                "Publisher with id {} does not exist",
                id
            )));
        }
    }
    if let Some(id) = id_categoria {
        if !repository.categories.exists(id).await? {
            return Err(AppError::Validation(format!(
                "Category with id {} does not exist",
                id
            )));
        }
    }
    Ok(())
}

impl Services {
    pub fn new(repository: Repository, auth: AuthConfig) -> Self {
        Self {
            users: users::UsersService::new(repository.clone(), auth),
            authors: authors::AuthorsService::new(repository.clone()),
            publishers: publishers::PublishersService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            magazines: magazines::MagazinesService::new(repository.clone()),
            newspapers: newspapers::NewspapersService::new(repository.clone()),
            items: items::ItemsService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            fines: fines::FinesService::new(repository.clone()),
            repository,
        }
    }

    /// Database connectivity probe for the health endpoint
    pub async fn ping_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
