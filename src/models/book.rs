//! Book model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Physical condition of a copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookCondition {
    #[default]
    New,
    Good,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl BookCondition {
    pub const ALL: [BookCondition; 4] = [
        BookCondition::New,
        BookCondition::Good,
        BookCondition::Poor,
        BookCondition::VeryPoor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookCondition::New => "New",
            BookCondition::Good => "Good",
            BookCondition::Poor => "Poor",
            BookCondition::VeryPoor => "Very Poor",
        }
    }
}

impl std::str::FromStr for BookCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(BookCondition::New),
            "Good" => Ok(BookCondition::Good),
            "Poor" => Ok(BookCondition::Poor),
            "Very Poor" => Ok(BookCondition::VeryPoor),
            _ => Err(format!("Invalid book condition: {}", s)),
        }
    }
}

super::impl_text_column!(BookCondition);

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub price: Decimal,
    pub condition: BookCondition,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 10, max = 13, message = "ISBN must be 10 to 13 characters"))]
    pub isbn: String,
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "Author must be 1 to 100 characters"))]
    pub author: String,
    pub genre: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub price: Decimal,
    #[serde(default)]
    pub condition: BookCondition,
}

/// Book listing query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl BookQuery {
    pub const MAX_PER_PAGE: i64 = 100;

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(20).clamp(1, Self::MAX_PER_PAGE)
    }

    /// Saturates instead of overflowing on absurd page numbers
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }
}

/// Rejects negative money amounts
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut error = ValidationError::new("range");
        error.message = Some("Amount must be greater than or equal to 0".into());
        return Err(error);
    }
    Ok(())
}
