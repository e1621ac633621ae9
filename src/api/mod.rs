//! API handlers for the bookstore REST endpoints

pub mod auth;
pub mod books;
pub mod bookstores;
pub mod borrowings;
pub mod clients;
pub mod health;
pub mod openapi;
pub mod sales;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::auth::TokenClaims,
    AppState,
};

/// Extractor for a caller holding a valid bearer token
pub struct AuthenticatedUser(pub TokenClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Not authenticated".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Authentication("Invalid authorization header format".to_string()))?;

        let claims = state.services.auth.verify(token)?;
        Ok(AuthenticatedUser(claims))
    }
}

/// Parse a path identifier, naming the entity in the error
pub fn parse_id(raw: &str, entity: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {} ID format", entity)))
}
