//! Client model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Client record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
    /// Cleared instead of deleting a client that has borrowing history
    pub is_active: bool,
}

/// Create or replace client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClientPayload {
    #[validate(length(min = 1, max = 50, message = "First name must be 1 to 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be 1 to 50 characters"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
    /// New clients start active; an update leaves the flag alone when omitted
    pub is_active: Option<bool>,
}

impl ClientPayload {
    pub fn is_active_or_default(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}
