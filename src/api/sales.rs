//! Sales endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::sale::{CreateSale, Sale},
};

use super::parse_id;

/// Record a sale
#[utoipa::path(
    post,
    path = "/sales",
    tag = "sales",
    request_body = CreateSale,
    responses(
        (status = 201, description = "Sale recorded", body = Sale),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_sale(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateSale>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let sale = state.services.sales.create(data).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// Get a sale by ID
#[utoipa::path(
    get,
    path = "/sales/{id}",
    tag = "sales",
    params(("id" = String, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale details", body = Sale),
        (status = 404, description = "Sale not found")
    )
)]
pub async fn get_sale(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Sale>> {
    let id = parse_id(&id, "sale")?;
    let sale = state.services.sales.get_by_id(id).await?;
    Ok(Json(sale))
}

/// Sales made to a client
#[utoipa::path(
    get,
    path = "/sales/client/{id}",
    tag = "sales",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Sales of the client", body = Vec<Sale>),
        (status = 404, description = "No sales found for this client")
    )
)]
pub async fn get_client_sales(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Sale>>> {
    let id = parse_id(&id, "client")?;
    let sales = state.services.sales.list_by_client(id).await?;
    Ok(Json(sales))
}

/// Sales made by a bookstore
#[utoipa::path(
    get,
    path = "/sales/bookstore/{id}",
    tag = "sales",
    params(("id" = String, Path, description = "Bookstore ID")),
    responses(
        (status = 200, description = "Sales of the bookstore", body = Vec<Sale>),
        (status = 404, description = "No sales found for this bookstore")
    )
)]
pub async fn get_bookstore_sales(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Sale>>> {
    let id = parse_id(&id, "bookstore")?;
    let sales = state.services.sales.list_by_bookstore(id).await?;
    Ok(Json(sales))
}
