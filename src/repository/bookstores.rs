//! Bookstores repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::bookstore::{BookInventory, Bookstore},
};

#[derive(Clone)]
pub struct BookstoresRepository {
    pool: Pool<Postgres>,
}

impl BookstoresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get bookstore by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Bookstore> {
        sqlx::query_as::<_, Bookstore>("SELECT * FROM bookstores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Bookstore not found".to_string()))
    }

    /// Insert a bookstore
    pub async fn create(&self, bookstore: &Bookstore) -> AppResult<Bookstore> {
        let row = sqlx::query_as::<_, Bookstore>(
            "INSERT INTO bookstores (id, name, address, email) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(bookstore.id)
        .bind(&bookstore.name)
        .bind(&bookstore.address)
        .bind(&bookstore.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert an inventory line
    pub async fn add_inventory(&self, inventory: &BookInventory) -> AppResult<BookInventory> {
        let row = sqlx::query_as::<_, BookInventory>(
            r#"
            INSERT INTO book_inventories (id, bookstore_id, isbn, quantity_available)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(inventory.id)
        .bind(inventory.bookstore_id)
        .bind(inventory.isbn)
        .bind(inventory.quantity_available)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Inventory lines of a bookstore
    pub async fn list_inventory(&self, bookstore_id: Uuid) -> AppResult<Vec<BookInventory>> {
        let rows = sqlx::query_as::<_, BookInventory>(
            "SELECT * FROM book_inventories WHERE bookstore_id = $1 ORDER BY isbn",
        )
        .bind(bookstore_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
