//! Borrowing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::borrowing::{Borrowing, CreateBorrowing},
};

use super::parse_id;

/// Open a loan
#[utoipa::path(
    post,
    path = "/borrowings",
    tag = "borrowings",
    request_body = CreateBorrowing,
    responses(
        (status = 201, description = "Borrowing created", body = Borrowing),
        (status = 400, description = "Due date not after borrow date")
    )
)]
pub async fn create_borrowing(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBorrowing>,
) -> AppResult<(StatusCode, Json<Borrowing>)> {
    let borrowing = state.services.borrowings.create(data).await?;
    Ok((StatusCode::CREATED, Json(borrowing)))
}

/// List all borrowings
#[utoipa::path(
    get,
    path = "/borrowings",
    tag = "borrowings",
    responses(
        (status = 200, description = "All borrowings", body = Vec<Borrowing>),
        (status = 404, description = "No borrowings found")
    )
)]
pub async fn list_borrowings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Borrowing>>> {
    let borrowings = state.services.borrowings.list().await?;
    Ok(Json(borrowings))
}

/// Get a borrowing by ID
#[utoipa::path(
    get,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = String, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "Borrowing details", body = Borrowing),
        (status = 404, description = "Borrowing not found")
    )
)]
pub async fn get_borrowing(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Borrowing>> {
    let id = parse_id(&id, "borrowing")?;
    let borrowing = state.services.borrowings.get_by_id(id).await?;
    Ok(Json(borrowing))
}

/// Borrowings received by a client
#[utoipa::path(
    get,
    path = "/borrowings/client/{id}",
    tag = "borrowings",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Borrowings of the client", body = Vec<Borrowing>),
        (status = 404, description = "No borrowings found for this client")
    )
)]
pub async fn get_client_borrowings(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Borrowing>>> {
    let id = parse_id(&id, "client")?;
    let borrowings = state.services.borrowings.list_by_client(id).await?;
    Ok(Json(borrowings))
}

/// Borrowings lent by a bookstore
#[utoipa::path(
    get,
    path = "/borrowings/bookstore/{id}",
    tag = "borrowings",
    params(("id" = String, Path, description = "Bookstore ID")),
    responses(
        (status = 200, description = "Borrowings of the bookstore", body = Vec<Borrowing>),
        (status = 404, description = "No borrowings found for this bookstore")
    )
)]
pub async fn get_bookstore_borrowings(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Borrowing>>> {
    let id = parse_id(&id, "bookstore")?;
    let borrowings = state.services.borrowings.list_by_bookstore(id).await?;
    Ok(Json(borrowings))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/borrowings/return/{id}",
    tag = "borrowings",
    params(("id" = String, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "Book returned", body = Borrowing),
        (status = 404, description = "Borrowing not found"),
        (status = 409, description = "Borrowing already returned"),
        (status = 503, description = "Store unavailable, retry")
    )
)]
pub async fn return_borrowing(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Borrowing>> {
    let id = parse_id(&id, "borrowing")?;
    let borrowing = state.services.borrowings.process_return(id).await?;
    Ok(Json(borrowing))
}
