//! Client management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::client::{Client, ClientPayload},
};

use super::{parse_id, AuthenticatedUser};

/// Create a client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Client created", body = Client),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    Json(data): Json<ClientPayload>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = state.services.clients.create(data).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// List all clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of clients", body = Vec<Client>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No clients found")
    )
)]
pub async fn list_clients(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Client>>> {
    tracing::debug!(sub = %claims.sub, "Listing clients");
    let clients = state.services.clients.list().await?;
    Ok(Json(clients))
}

/// Get a client by ID
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    let id = parse_id(&id, "client")?;
    let client = state.services.clients.get_by_id(id).await?;
    Ok(Json(client))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = String, Path, description = "Client ID")),
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 404, description = "Client not found")
    )
)]
pub async fn update_client(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<ClientPayload>,
) -> AppResult<Json<Client>> {
    let id = parse_id(&id, "client")?;
    let client = state.services.clients.update(id, data).await?;
    Ok(Json(client))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn delete_client(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, "client")?;
    state.services.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
