//! Bookstore Server
//!
//! REST JSON API for books, bookstores, clients, sales and the borrowing
//! lifecycle, backed by PostgreSQL.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let routes = Router::new()
        // Health
        .route("/", get(api::health::root))
        .route("/health", get(api::health::health_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        // Books
        .route("/books", get(api::books::list_books).post(api::books::create_book))
        .route("/books/:id", get(api::books::get_book).delete(api::books::delete_book))
        // Bookstores
        .route("/bookstores", post(api::bookstores::create_bookstore))
        .route("/bookstores/:id", get(api::bookstores::get_bookstore))
        .route(
            "/bookstores/:id/inventory",
            get(api::bookstores::list_inventory).post(api::bookstores::add_inventory),
        )
        // Clients
        .route(
            "/clients",
            get(api::clients::list_clients).post(api::clients::create_client),
        )
        .route(
            "/clients/:id",
            get(api::clients::get_client)
                .put(api::clients::update_client)
                .delete(api::clients::delete_client),
        )
        // Borrowings
        .route(
            "/borrowings",
            get(api::borrowings::list_borrowings).post(api::borrowings::create_borrowing),
        )
        .route("/borrowings/:id", get(api::borrowings::get_borrowing))
        .route("/borrowings/client/:id", get(api::borrowings::get_client_borrowings))
        .route("/borrowings/bookstore/:id", get(api::borrowings::get_bookstore_borrowings))
        .route("/borrowings/return/:id", post(api::borrowings::return_borrowing))
        // Sales
        .route("/sales", post(api::sales::create_sale))
        .route("/sales/:id", get(api::sales::get_sale))
        .route("/sales/client/:id", get(api::sales::get_client_sales))
        .route("/sales/bookstore/:id", get(api::sales::get_bookstore_sales))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(api::openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
