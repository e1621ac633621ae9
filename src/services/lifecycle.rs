//! Borrowing return lifecycle
//!
//! A loan moves from `active`/`overdue` to exactly one of `returned` or
//! `returned_overdue`, and never leaves that state. The guarded store update
//! is the only thing standing between two concurrent returns of the same
//! loan: whichever write lands second matches no row and is reported as a
//! conflict.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{Borrowing, BorrowingStatus, ReturnUpdate},
    repository::BorrowingStore,
    services::fees::FeePolicy,
};

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, truncated to the microsecond precision Postgres stores
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}

#[derive(Clone)]
pub struct BorrowingLifecycle {
    store: Arc<dyn BorrowingStore>,
    fees: Arc<dyn FeePolicy>,
    clock: Arc<dyn Clock>,
}

impl BorrowingLifecycle {
    pub fn new(store: Arc<dyn BorrowingStore>, fees: Arc<dyn FeePolicy>, clock: Arc<dyn Clock>) -> Self {
        Self { store, fees, clock }
    }

    /// Return a borrowed book.
    ///
    /// Fails with `NotFound` for an unknown id and with `Conflict` when the
    /// loan is already returned, including when another request returned it
    /// between our read and our write. Store failures are passed through
    /// untouched so the caller can retry them.
    pub async fn process_return(&self, id: Uuid) -> AppResult<Borrowing> {
        let borrowing = self
            .store
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Borrowing not found".to_string()))?;

        if borrowing.status.is_terminal() {
            tracing::warn!(borrowing_id = %id, status = %borrowing.status, "Return refused, loan already closed");
            return Err(AppError::Conflict("Borrowing already returned".to_string()));
        }

        let now = self.clock.now();
        let overdue = borrowing.is_overdue_at(now);
        let update = ReturnUpdate {
            return_date: now,
            status: BorrowingStatus::on_return(borrowing.due_date, now),
        };

        let modified = self
            .store
            .conditional_update(id, &BorrowingStatus::OUTSTANDING, update)
            .await?;

        if modified == 0 {
            tracing::warn!(borrowing_id = %id, "Return lost the race, loan already closed");
            return Err(AppError::Conflict("Borrowing already returned".to_string()));
        }

        tracing::info!(borrowing_id = %id, status = %update.status, "Borrowing returned");

        if overdue {
            if let Err(e) = self.fees.apply(borrowing.borrower_id, &borrowing).await {
                tracing::error!(
                    borrowing_id = %id,
                    borrower_id = %borrowing.borrower_id,
                    "Failed to apply overdue fee: {}",
                    e
                );
            }
        }

        Ok(Borrowing {
            return_date: Some(update.return_date),
            status: update.status,
            ..borrowing
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Duration;
    use tokio::sync::{Barrier, Mutex};
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::models::borrowing::SourceType;
    use crate::repository::borrowings::MockBorrowingStore;
    use crate::services::fees::MockFeePolicy;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn borrowing(status: BorrowingStatus, due_in: Duration, now: DateTime<Utc>) -> Borrowing {
        Borrowing {
            id: Uuid::new_v4(),
            borrower_id: Uuid::new_v4(),
            source_type: SourceType::Bookstore,
            source_id: Uuid::new_v4(),
            book_id: Uuid::new_v4(),
            borrow_date: now - Duration::days(10),
            due_date: now + due_in,
            return_date: None,
            status,
        }
    }

    fn store_returning(record: Option<Borrowing>, modified: u64) -> MockBorrowingStore {
        let mut store = MockBorrowingStore::new();
        store.expect_find().returning(move |_| Ok(record.clone()));
        store
            .expect_conditional_update()
            .withf(|_, expected, _| expected.to_vec() == BorrowingStatus::OUTSTANDING.to_vec())
            .returning(move |_, _, _| Ok(modified));
        store
    }

    fn lifecycle(store: impl BorrowingStore + 'static, fees: impl FeePolicy + 'static, now: DateTime<Utc>) -> BorrowingLifecycle {
        BorrowingLifecycle::new(Arc::new(store), Arc::new(fees), Arc::new(FixedClock(now)))
    }

    #[tokio::test]
    async fn test_on_time_return() {
        let now = Utc::now();
        let record = borrowing(BorrowingStatus::Active, Duration::days(5), now);
        let id = record.id;

        let mut store = MockBorrowingStore::new();
        let found = record.clone();
        store.expect_find().times(1).returning(move |_| Ok(Some(found.clone())));
        store
            .expect_conditional_update()
            .withf(move |target, _, update| {
                *target == id
                    && update.return_date == now
                    && update.status == BorrowingStatus::Returned
            })
            .times(1)
            .returning(|_, _, _| Ok(1));

        let mut fees = MockFeePolicy::new();
        fees.expect_apply().never();

        let returned = assert_ok!(lifecycle(store, fees, now).process_return(id).await);
        assert_eq!(returned.status, BorrowingStatus::Returned);
        assert_eq!(returned.return_date, Some(now));
        assert_eq!(returned.due_date, record.due_date);
    }

    #[tokio::test]
    async fn test_overdue_return_applies_fee_once() {
        let now = Utc::now();
        let record = borrowing(BorrowingStatus::Active, -Duration::days(5), now);
        let (id, borrower_id) = (record.id, record.borrower_id);

        let store = store_returning(Some(record), 1);
        let mut fees = MockFeePolicy::new();
        fees.expect_apply()
            .withf(move |borrower, b| *borrower == borrower_id && b.id == id && b.return_date.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let returned = assert_ok!(lifecycle(store, fees, now).process_return(id).await);
        assert_eq!(returned.status, BorrowingStatus::ReturnedOverdue);
        assert_eq!(returned.return_date, Some(now));
    }

    #[tokio::test]
    async fn test_overdue_status_returned_on_time() {
        let now = Utc::now();
        let record = borrowing(BorrowingStatus::Overdue, Duration::hours(1), now);
        let id = record.id;

        let mut fees = MockFeePolicy::new();
        fees.expect_apply().never();

        let returned = assert_ok!(
            lifecycle(store_returning(Some(record), 1), fees, now)
                .process_return(id)
                .await
        );
        assert_eq!(returned.status, BorrowingStatus::Returned);
    }

    #[tokio::test]
    async fn test_return_on_due_instant_is_not_overdue() {
        let now = Utc::now();
        let record = borrowing(BorrowingStatus::Active, Duration::zero(), now);
        let id = record.id;

        let mut fees = MockFeePolicy::new();
        fees.expect_apply().never();

        let returned = assert_ok!(
            lifecycle(store_returning(Some(record), 1), fees, now)
                .process_return(id)
                .await
        );
        assert_eq!(returned.status, BorrowingStatus::Returned);
    }

    #[tokio::test]
    async fn test_unknown_borrowing_is_not_found_without_write() {
        let mut store = MockBorrowingStore::new();
        store.expect_find().times(1).returning(|_| Ok(None));
        store.expect_conditional_update().never();

        let mut fees = MockFeePolicy::new();
        fees.expect_apply().never();

        let error = assert_err!(lifecycle(store, fees, Utc::now()).process_return(Uuid::new_v4()).await);
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_closed_loan_is_conflict_without_write() {
        let now = Utc::now();
        for status in [BorrowingStatus::Returned, BorrowingStatus::ReturnedOverdue] {
            let mut record = borrowing(status, -Duration::days(3), now);
            record.return_date = Some(now - Duration::days(1));
            let id = record.id;

            let mut store = MockBorrowingStore::new();
            store.expect_find().returning(move |_| Ok(Some(record.clone())));
            store.expect_conditional_update().never();

            let mut fees = MockFeePolicy::new();
            fees.expect_apply().never();

            let error = assert_err!(lifecycle(store, fees, now).process_return(id).await);
            assert!(matches!(error, AppError::Conflict(_)));
        }
    }

    #[tokio::test]
    async fn test_lost_update_is_conflict_and_skips_fee() {
        let now = Utc::now();
        let record = borrowing(BorrowingStatus::Active, -Duration::days(5), now);
        let id = record.id;

        let mut fees = MockFeePolicy::new();
        fees.expect_apply().never();

        let error = assert_err!(
            lifecycle(store_returning(Some(record), 0), fees, now)
                .process_return(id)
                .await
        );
        assert!(matches!(error, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_fee_failure_does_not_fail_return() {
        let now = Utc::now();
        let record = borrowing(BorrowingStatus::Active, -Duration::days(5), now);
        let id = record.id;

        let mut fees = MockFeePolicy::new();
        fees.expect_apply()
            .times(1)
            .returning(|_, _| Err(AppError::Internal("billing offline".to_string())));

        let returned = assert_ok!(
            lifecycle(store_returning(Some(record), 1), fees, now)
                .process_return(id)
                .await
        );
        assert_eq!(returned.status, BorrowingStatus::ReturnedOverdue);
    }

    #[tokio::test]
    async fn test_store_timeout_is_surfaced_as_retryable() {
        let mut store = MockBorrowingStore::new();
        store
            .expect_find()
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));
        store.expect_conditional_update().never();

        let error = assert_err!(
            lifecycle(store, MockFeePolicy::new(), Utc::now())
                .process_return(Uuid::new_v4())
                .await
        );
        assert!(error.is_retryable());
    }

    /// Compare-and-swap store. With a barrier, every `find` waits until all
    /// racing callers have read before anyone may write.
    #[derive(Default)]
    struct InMemoryStore {
        records: Mutex<HashMap<Uuid, Borrowing>>,
        read_barrier: Option<Barrier>,
    }

    impl InMemoryStore {
        fn with(record: Borrowing, racers: Option<usize>) -> Self {
            Self {
                records: Mutex::new(HashMap::from([(record.id, record)])),
                read_barrier: racers.map(Barrier::new),
            }
        }
    }

    #[async_trait]
    impl BorrowingStore for InMemoryStore {
        async fn find(&self, id: Uuid) -> AppResult<Option<Borrowing>> {
            let record = self.records.lock().await.get(&id).cloned();
            if let Some(barrier) = &self.read_barrier {
                barrier.wait().await;
            }
            Ok(record)
        }

        async fn conditional_update(
            &self,
            id: Uuid,
            expected: &[BorrowingStatus],
            update: ReturnUpdate,
        ) -> AppResult<u64> {
            let mut records = self.records.lock().await;
            match records.get_mut(&id) {
                Some(record) if expected.contains(&record.status) => {
                    record.return_date = Some(update.return_date);
                    record.status = update.status;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[derive(Default)]
    struct CountingFees(AtomicUsize);

    #[async_trait]
    impl FeePolicy for CountingFees {
        async fn apply(&self, _borrower_id: Uuid, _borrowing: &Borrowing) -> AppResult<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_second_return_conflicts_and_keeps_first_result() {
        let start = Utc::now();
        let record = borrowing(BorrowingStatus::Active, Duration::days(1), start);
        let id = record.id;
        let store = Arc::new(InMemoryStore::with(record, None));
        let fees = Arc::new(CountingFees::default());

        let first = BorrowingLifecycle::new(store.clone(), fees.clone(), Arc::new(FixedClock(start)));
        let returned = assert_ok!(first.process_return(id).await);
        assert_eq!(returned.status, BorrowingStatus::Returned);

        // A week later the loan would be overdue, but it is already closed
        let later = start + Duration::days(7);
        let second = BorrowingLifecycle::new(store.clone(), fees.clone(), Arc::new(FixedClock(later)));
        let error = assert_err!(second.process_return(id).await);
        assert!(matches!(error, AppError::Conflict(_)));

        let stored = store.records.lock().await.get(&id).cloned().unwrap();
        assert_eq!(stored.status, BorrowingStatus::Returned);
        assert_eq!(stored.return_date, Some(start));
        assert_eq!(fees.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_returns_have_single_winner() {
        let now = Utc::now();
        let record = borrowing(BorrowingStatus::Active, -Duration::days(2), now);
        let id = record.id;
        let store = Arc::new(InMemoryStore::with(record, Some(2)));
        let fees = Arc::new(CountingFees::default());
        let engine = BorrowingLifecycle::new(store.clone(), fees.clone(), Arc::new(FixedClock(now)));

        let (a, b) = tokio::join!(engine.process_return(id), engine.process_return(id));

        let results = [a, b];
        let winners: Vec<&Borrowing> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict(_))))
            .count();

        assert_eq!(winners.len(), 1);
        assert_eq!(conflicts, 1);
        assert_eq!(winners[0].status, BorrowingStatus::ReturnedOverdue);
        assert_eq!(fees.0.load(Ordering::SeqCst), 1);

        let stored = store.records.lock().await.get(&id).cloned().unwrap();
        assert_eq!(stored.status, BorrowingStatus::ReturnedOverdue);
        assert_eq!(stored.return_date, Some(now));
    }
}
