//! Sales service

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::sale::{CreateSale, Sale},
    repository::Repository,
    services::{lifecycle::Clock, non_empty},
};

#[derive(Clone)]
pub struct SalesService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl SalesService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Record a sale
    pub async fn create(&self, data: CreateSale) -> AppResult<Sale> {
        data.validate()?;

        let sale = Sale {
            id: Uuid::new_v4(),
            client_id: data.client_id,
            book_id: data.book_id,
            bookstore_id: data.bookstore_id,
            amount: data.amount,
            sale_date: data.sale_date.unwrap_or_else(|| self.clock.now()),
        };
        self.repository.sales.create(&sale).await
    }

    /// Get sale by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Sale> {
        self.repository.sales.get_by_id(id).await
    }

    /// Sales made to a client
    pub async fn list_by_client(&self, client_id: Uuid) -> AppResult<Vec<Sale>> {
        non_empty(
            self.repository.sales.list_by_client(client_id).await?,
            "No sales found for this client",
        )
    }

    /// Sales made by a bookstore
    pub async fn list_by_bookstore(&self, bookstore_id: Uuid) -> AppResult<Vec<Sale>> {
        non_empty(
            self.repository.sales.list_by_bookstore(bookstore_id).await?,
            "No sales found for this bookstore",
        )
    }
}
