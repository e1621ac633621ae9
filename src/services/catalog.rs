//! Book catalog service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// One page of books with the total count
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64)> {
        self.repository.books.list(query).await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        data.validate()?;

        let book = Book {
            id: Uuid::new_v4(),
            isbn: data.isbn,
            title: data.title,
            author: data.author,
            genre: data.genre,
            price: data.price,
            condition: data.condition,
        };
        self.repository.books.create(&book).await
    }

    /// Delete a book
    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
