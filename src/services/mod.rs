//! Business logic services

pub mod auth;
pub mod bookstores;
pub mod borrowings;
pub mod catalog;
pub mod clients;
pub mod fees;
pub mod lifecycle;
pub mod sales;
pub mod seed;

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

use self::{
    fees::FeePolicy,
    lifecycle::{BorrowingLifecycle, Clock},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub bookstores: bookstores::BookstoresService,
    pub clients: clients::ClientsService,
    pub borrowings: borrowings::BorrowingsService,
    pub sales: sales::SalesService,
}

impl Services {
    /// Create all services with the given repository.
    ///
    /// The fee policy and clock are injected so that the return workflow can
    /// be rewired without touching the services themselves.
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        fees: Arc<dyn FeePolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let lifecycle = BorrowingLifecycle::new(
            Arc::new(repository.borrowings.clone()),
            fees,
            clock.clone(),
        );

        Self {
            auth: auth::AuthService::new(auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            bookstores: bookstores::BookstoresService::new(repository.clone()),
            clients: clients::ClientsService::new(repository.clone()),
            borrowings: borrowings::BorrowingsService::new(repository.clone(), lifecycle, clock.clone()),
            sales: sales::SalesService::new(repository, clock),
        }
    }
}

/// Treat an empty listing as "nothing found".
pub(crate) fn non_empty<T>(rows: Vec<T>, message: &str) -> AppResult<Vec<T>> {
    if rows.is_empty() {
        return Err(AppError::NotFound(message.to_string()));
    }
    Ok(rows)
}
