//! Login endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::auth::{LoginRequest, TokenResponse},
};

/// Exchange the shared password for a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.services.auth.login(&request.password)?;
    Ok(Json(token))
}
