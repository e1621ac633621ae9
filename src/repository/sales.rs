//! Sales repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::sale::Sale,
};

#[derive(Clone)]
pub struct SalesRepository {
    pool: Pool<Postgres>,
}

impl SalesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get sale by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Sale> {
        sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))
    }

    /// Insert a sale
    pub async fn create(&self, sale: &Sale) -> AppResult<Sale> {
        let row = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (id, client_id, book_id, bookstore_id, amount, sale_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(sale.id)
        .bind(sale.client_id)
        .bind(sale.book_id)
        .bind(sale.bookstore_id)
        .bind(sale.amount)
        .bind(sale.sale_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Sales made to a client
    pub async fn list_by_client(&self, client_id: Uuid) -> AppResult<Vec<Sale>> {
        let rows = sqlx::query_as::<_, Sale>(
            "SELECT * FROM sales WHERE client_id = $1 ORDER BY sale_date DESC",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Sales made by a bookstore
    pub async fn list_by_bookstore(&self, bookstore_id: Uuid) -> AppResult<Vec<Sale>> {
        let rows = sqlx::query_as::<_, Sale>(
            "SELECT * FROM sales WHERE bookstore_id = $1 ORDER BY sale_date DESC",
        )
        .bind(bookstore_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
