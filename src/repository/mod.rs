//! Repository layer for database operations

pub mod books;
pub mod bookstores;
pub mod borrowings;
pub mod clients;
pub mod sales;

use sqlx::{Pool, Postgres};

pub use borrowings::BorrowingStore;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub bookstores: bookstores::BookstoresRepository,
    pub clients: clients::ClientsRepository,
    pub borrowings: borrowings::BorrowingsRepository,
    pub sales: sales::SalesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            bookstores: bookstores::BookstoresRepository::new(pool.clone()),
            clients: clients::ClientsRepository::new(pool.clone()),
            borrowings: borrowings::BorrowingsRepository::new(pool.clone()),
            sales: sales::SalesRepository::new(pool.clone()),
            pool,
        }
    }
}
