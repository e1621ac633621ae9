//! Overdue fee policy hook

use async_trait::async_trait;
use uuid::Uuid;

use crate::{error::AppResult, models::borrowing::Borrowing};

/// Invoked once for every loan returned past its due date, with the record
/// as it stood before the return was written.
///
/// Implementations may fail; the caller logs the failure and the return
/// itself still stands.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeePolicy: Send + Sync {
    async fn apply(&self, borrower_id: Uuid, borrowing: &Borrowing) -> AppResult<()>;
}

/// Records that a fee is owed without charging anything.
#[derive(Debug, Clone, Default)]
pub struct LoggingFeePolicy;

#[async_trait]
impl FeePolicy for LoggingFeePolicy {
    async fn apply(&self, borrower_id: Uuid, borrowing: &Borrowing) -> AppResult<()> {
        // TODO: charge the borrower once a fee schedule exists
        tracing::warn!(
            borrower_id = %borrower_id,
            borrowing_id = %borrowing.id,
            due_date = %borrowing.due_date,
            "Overdue fee should be applied to borrower"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tokio_test::assert_ok;

    use super::*;
    use crate::models::borrowing::{BorrowingStatus, SourceType};

    #[tokio::test]
    async fn test_logging_policy_never_fails() {
        let now = Utc::now();
        let borrowing = Borrowing {
            id: Uuid::new_v4(),
            borrower_id: Uuid::new_v4(),
            source_type: SourceType::Client,
            source_id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            borrow_date: now - Duration::days(20),
            due_date: now - Duration::days(6),
            return_date: None,
            status: BorrowingStatus::Active,
        };

        assert_ok!(LoggingFeePolicy.apply(borrowing.borrower_id, &borrowing).await);
    }
}
