//! Sale model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::book::non_negative;

/// Sale record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sale {
    pub id: Uuid,
    pub client_id: Uuid,
    pub book_id: Uuid,
    pub bookstore_id: Uuid,
    pub amount: Decimal,
    pub sale_date: DateTime<Utc>,
}

/// Create sale request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSale {
    pub client_id: Uuid,
    pub book_id: Uuid,
    pub bookstore_id: Uuid,
    #[validate(custom(function = "non_negative"))]
    pub amount: Decimal,
    /// Defaults to the creation time
    pub sale_date: Option<DateTime<Utc>>,
}
