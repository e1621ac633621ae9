//! Borrowing model and loan lifecycle states

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Where a borrowing stands in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BorrowingStatus {
    Active,
    Overdue,
    Returned,
    ReturnedOverdue,
}

impl BorrowingStatus {
    /// Statuses a loan may be returned from.
    pub const OUTSTANDING: [BorrowingStatus; 2] = [BorrowingStatus::Active, BorrowingStatus::Overdue];

    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowingStatus::Active => "active",
            BorrowingStatus::Overdue => "overdue",
            BorrowingStatus::Returned => "returned",
            BorrowingStatus::ReturnedOverdue => "returned_overdue",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        match self {
            BorrowingStatus::Active | BorrowingStatus::Overdue => false,
            BorrowingStatus::Returned | BorrowingStatus::ReturnedOverdue => true,
        }
    }

    /// Terminal status reached when returning at `now` a loan due at `due_date`.
    pub fn on_return(due_date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now > due_date {
            BorrowingStatus::ReturnedOverdue
        } else {
            BorrowingStatus::Returned
        }
    }
}

impl std::fmt::Display for BorrowingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BorrowingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BorrowingStatus::Active),
            "overdue" => Ok(BorrowingStatus::Overdue),
            "returned" => Ok(BorrowingStatus::Returned),
            "returned_overdue" => Ok(BorrowingStatus::ReturnedOverdue),
            _ => Err(format!("Invalid borrowing status: {}", s)),
        }
    }
}

super::impl_text_column!(BorrowingStatus);

/// Kind of party lending the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Bookstore,
    Client,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Bookstore => "bookstore",
            SourceType::Client => "client",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bookstore" => Ok(SourceType::Bookstore),
            "client" => Ok(SourceType::Client),
            _ => Err(format!("Invalid source type: {}", s)),
        }
    }
}

super::impl_text_column!(SourceType);

/// One book lent from a bookstore or a client to a borrowing client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrowing {
    pub id: Uuid,
    /// Client receiving the book
    pub borrower_id: Uuid,
    pub source_type: SourceType,
    /// Bookstore or client id, according to `source_type`
    pub source_id: Uuid,
    pub book_id: Uuid,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Set exactly when `status` is terminal
    pub return_date: Option<DateTime<Utc>>,
    pub status: BorrowingStatus,
}

impl Borrowing {
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        now > self.due_date
    }
}

/// Create borrowing request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBorrowing {
    pub borrower_id: Uuid,
    pub source_type: SourceType,
    pub source_id: Uuid,
    pub book_id: Uuid,
    /// Defaults to the creation time
    pub borrow_date: Option<DateTime<Utc>>,
    pub due_date: DateTime<Utc>,
}

/// Fields written by the return transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnUpdate {
    pub return_date: DateTime<Utc>,
    pub status: BorrowingStatus,
}
