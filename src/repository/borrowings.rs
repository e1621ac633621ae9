//! Borrowings repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::borrowing::{Borrowing, BorrowingStatus, ReturnUpdate, SourceType},
};

/// Persistence operations the loan lifecycle relies on.
///
/// `conditional_update` must apply atomically: the write lands only if the
/// record still has one of the `expected` statuses, and the returned count
/// tells the caller whether it did.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowingStore: Send + Sync {
    async fn find(&self, id: Uuid) -> AppResult<Option<Borrowing>>;

    async fn conditional_update(
        &self,
        id: Uuid,
        expected: &[BorrowingStatus],
        update: ReturnUpdate,
    ) -> AppResult<u64>;
}

#[derive(Clone)]
pub struct BorrowingsRepository {
    pool: Pool<Postgres>,
}

impl BorrowingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new borrowing
    pub async fn create(&self, borrowing: &Borrowing) -> AppResult<Borrowing> {
        let row = sqlx::query_as::<_, Borrowing>(
            r#"
            INSERT INTO borrowings (
                id, borrower_id, source_type, source_id, book_id,
                borrow_date, due_date, return_date, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(borrowing.id)
        .bind(borrowing.borrower_id)
        .bind(borrowing.source_type)
        .bind(borrowing.source_id)
        .bind(borrowing.book_id)
        .bind(borrowing.borrow_date)
        .bind(borrowing.due_date)
        .bind(borrowing.return_date)
        .bind(borrowing.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// List all borrowings
    pub async fn list(&self) -> AppResult<Vec<Borrowing>> {
        let rows = sqlx::query_as::<_, Borrowing>("SELECT * FROM borrowings ORDER BY borrow_date")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Borrowings received by a client
    pub async fn list_by_borrower(&self, borrower_id: Uuid) -> AppResult<Vec<Borrowing>> {
        let rows = sqlx::query_as::<_, Borrowing>(
            "SELECT * FROM borrowings WHERE borrower_id = $1 ORDER BY borrow_date",
        )
        .bind(borrower_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Borrowings lent by a given source
    pub async fn list_by_source(
        &self,
        source_type: SourceType,
        source_id: Uuid,
    ) -> AppResult<Vec<Borrowing>> {
        let rows = sqlx::query_as::<_, Borrowing>(
            "SELECT * FROM borrowings WHERE source_type = $1 AND source_id = $2 ORDER BY borrow_date",
        )
        .bind(source_type)
        .bind(source_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[async_trait]
impl BorrowingStore for BorrowingsRepository {
    async fn find(&self, id: Uuid) -> AppResult<Option<Borrowing>> {
        let row = sqlx::query_as::<_, Borrowing>("SELECT * FROM borrowings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn conditional_update(
        &self,
        id: Uuid,
        expected: &[BorrowingStatus],
        update: ReturnUpdate,
    ) -> AppResult<u64> {
        let expected: Vec<&str> = expected.iter().map(|s| s.as_str()).collect();

        let result = sqlx::query(
            r#"
            UPDATE borrowings
            SET return_date = $1, status = $2
            WHERE id = $3 AND status = ANY($4)
            "#,
        )
        .bind(update.return_date)
        .bind(update.status)
        .bind(id)
        .bind(expected)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
