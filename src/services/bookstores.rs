//! Bookstore and inventory service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::bookstore::{BookInventory, Bookstore, CreateBookInventory, CreateBookstore},
    repository::Repository,
    services::non_empty,
};

#[derive(Clone)]
pub struct BookstoresService {
    repository: Repository,
}

impl BookstoresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a bookstore
    pub async fn create(&self, data: CreateBookstore) -> AppResult<Bookstore> {
        data.validate()?;

        let bookstore = Bookstore {
            id: Uuid::new_v4(),
            name: data.name,
            address: data.address,
            email: data.email,
        };
        self.repository.bookstores.create(&bookstore).await
    }

    /// Get bookstore by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Bookstore> {
        self.repository.bookstores.get_by_id(id).await
    }

    /// Add a stock line to a bookstore
    pub async fn add_inventory(&self, bookstore_id: Uuid, data: CreateBookInventory) -> AppResult<BookInventory> {
        data.validate()?;

        let inventory = BookInventory {
            id: Uuid::new_v4(),
            bookstore_id,
            isbn: data.isbn,
            quantity_available: data.quantity_available,
        };
        self.repository.bookstores.add_inventory(&inventory).await
    }

    /// Stock lines of a bookstore
    pub async fn list_inventory(&self, bookstore_id: Uuid) -> AppResult<Vec<BookInventory>> {
        non_empty(
            self.repository.bookstores.list_inventory(bookstore_id).await?,
            "No inventories found for this bookstore",
        )
    }
}
