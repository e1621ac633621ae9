//! Borrowing management service

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{Borrowing, BorrowingStatus, CreateBorrowing, SourceType},
    repository::{BorrowingStore, Repository},
    services::{
        lifecycle::{BorrowingLifecycle, Clock},
        non_empty,
    },
};

#[derive(Clone)]
pub struct BorrowingsService {
    repository: Repository,
    lifecycle: BorrowingLifecycle,
    clock: Arc<dyn Clock>,
}

impl BorrowingsService {
    pub fn new(repository: Repository, lifecycle: BorrowingLifecycle, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            lifecycle,
            clock,
        }
    }

    /// Open a new loan
    pub async fn create(&self, data: CreateBorrowing) -> AppResult<Borrowing> {
        let borrowing = open_borrowing(data, Uuid::new_v4(), self.clock.now())?;
        let created = self.repository.borrowings.create(&borrowing).await?;

        tracing::info!(
            borrowing_id = %created.id,
            borrower_id = %created.borrower_id,
            source_type = %created.source_type,
            "Borrowing created"
        );
        Ok(created)
    }

    /// Get borrowing by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Borrowing> {
        self.repository
            .borrowings
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Borrowing not found".to_string()))
    }

    /// List every borrowing
    pub async fn list(&self) -> AppResult<Vec<Borrowing>> {
        non_empty(
            self.repository.borrowings.list().await?,
            "No borrowings found",
        )
    }

    /// Borrowings received by a client
    pub async fn list_by_client(&self, client_id: Uuid) -> AppResult<Vec<Borrowing>> {
        non_empty(
            self.repository.borrowings.list_by_borrower(client_id).await?,
            "No borrowings found for this client",
        )
    }

    /// Borrowings lent by a bookstore
    pub async fn list_by_bookstore(&self, bookstore_id: Uuid) -> AppResult<Vec<Borrowing>> {
        non_empty(
            self.repository
                .borrowings
                .list_by_source(SourceType::Bookstore, bookstore_id)
                .await?,
            "No borrowings found for this bookstore",
        )
    }

    /// Return a borrowed book
    pub async fn process_return(&self, id: Uuid) -> AppResult<Borrowing> {
        self.lifecycle.process_return(id).await
    }
}

/// Build a fresh `active` borrowing from a creation request.
fn open_borrowing(data: CreateBorrowing, id: Uuid, now: DateTime<Utc>) -> AppResult<Borrowing> {
    let borrow_date = data.borrow_date.unwrap_or(now);
    if data.due_date <= borrow_date {
        return Err(AppError::Validation(
            "Due date must be after the borrow date".to_string(),
        ));
    }

    Ok(Borrowing {
        id,
        borrower_id: data.borrower_id,
        source_type: data.source_type,
        source_id: data.source_id,
        book_id: data.book_id,
        borrow_date,
        due_date: data.due_date,
        return_date: None,
        status: BorrowingStatus::Active,
    })
}
