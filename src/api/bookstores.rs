//! Bookstore and inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::bookstore::{BookInventory, Bookstore, CreateBookInventory, CreateBookstore},
};

use super::parse_id;

/// Create a bookstore
#[utoipa::path(
    post,
    path = "/bookstores",
    tag = "bookstores",
    request_body = CreateBookstore,
    responses(
        (status = 201, description = "Bookstore created", body = Bookstore),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_bookstore(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBookstore>,
) -> AppResult<(StatusCode, Json<Bookstore>)> {
    let bookstore = state.services.bookstores.create(data).await?;
    Ok((StatusCode::CREATED, Json(bookstore)))
}

/// Get a bookstore by ID
#[utoipa::path(
    get,
    path = "/bookstores/{id}",
    tag = "bookstores",
    params(("id" = String, Path, description = "Bookstore ID")),
    responses(
        (status = 200, description = "Bookstore details", body = Bookstore),
        (status = 404, description = "Bookstore not found")
    )
)]
pub async fn get_bookstore(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Bookstore>> {
    let id = parse_id(&id, "bookstore")?;
    let bookstore = state.services.bookstores.get_by_id(id).await?;
    Ok(Json(bookstore))
}

/// Add a stock line to a bookstore
#[utoipa::path(
    post,
    path = "/bookstores/{id}/inventory",
    tag = "bookstores",
    params(("id" = String, Path, description = "Bookstore ID")),
    request_body = CreateBookInventory,
    responses(
        (status = 201, description = "Inventory added", body = BookInventory),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn add_inventory(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<CreateBookInventory>,
) -> AppResult<(StatusCode, Json<BookInventory>)> {
    let id = parse_id(&id, "bookstore")?;
    let inventory = state.services.bookstores.add_inventory(id, data).await?;
    Ok((StatusCode::CREATED, Json(inventory)))
}

/// List the stock lines of a bookstore
#[utoipa::path(
    get,
    path = "/bookstores/{id}/inventory",
    tag = "bookstores",
    params(("id" = String, Path, description = "Bookstore ID")),
    responses(
        (status = 200, description = "Inventory lines", body = Vec<BookInventory>),
        (status = 404, description = "No inventories found for this bookstore")
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<BookInventory>>> {
    let id = parse_id(&id, "bookstore")?;
    let inventory = state.services.bookstores.list_inventory(id).await?;
    Ok(Json(inventory))
}
