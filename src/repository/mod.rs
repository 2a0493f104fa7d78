//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod categories;
pub mod fines;
pub mod items;
pub mod loans;
pub mod magazines;
pub mod newspapers;
pub mod publishers;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub publishers: publishers::PublishersRepository,
    pub categories: categories::CategoriesRepository,
    pub books: books::BooksRepository,
    pub magazines: magazines::MagazinesRepository,
    pub newspapers: newspapers::NewspapersRepository,
    pub items: items::ItemsRepository,
    pub loans: loans::LoansRepository,
    pub fines: fines::FinesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            publishers: publishers::PublishersRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            magazines: magazines::MagazinesRepository::new(pool.clone()),
            newspapers: newspapers::NewspapersRepository::new(pool.clone()),
            items: items::ItemsRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            fines: fines::FinesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connectivity probe used by the health endpoint
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
