//! Bookstore and inventory models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Bookstore record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Bookstore {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub email: Option<String>,
}

/// Create bookstore request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookstore {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "Address must be 1 to 200 characters"))]
    pub address: String,
    pub email: Option<String>,
}

/// Stock line of a bookstore, keyed by ISBN
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInventory {
    pub id: Uuid,
    pub bookstore_id: Uuid,
    pub isbn: i64,
    pub quantity_available: i32,
}

/// Add inventory request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookInventory {
    pub isbn: i64,
    #[validate(range(min = 0, message = "Quantity must be greater than or equal to 0"))]
    pub quantity_available: i32,
}
