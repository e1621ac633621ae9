//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, bookstores, borrowings, clients, health, sales};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "1.0.0",
        description = "Books, bookstores, clients, sales and borrowings REST API"
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        // Auth
        auth::login,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::delete_book,
        // Bookstores
        bookstores::create_bookstore,
        bookstores::get_bookstore,
        bookstores::add_inventory,
        bookstores::list_inventory,
        // Clients
        clients::create_client,
        clients::list_clients,
        clients::get_client,
        clients::update_client,
        clients::delete_client,
        // Borrowings
        borrowings::create_borrowing,
        borrowings::list_borrowings,
        borrowings::get_borrowing,
        borrowings::get_client_borrowings,
        borrowings::get_bookstore_borrowings,
        borrowings::return_borrowing,
        // Sales
        sales::create_sale,
        sales::get_sale,
        sales::get_client_sales,
        sales::get_bookstore_sales,
    ),
    components(
        schemas(
            health::HealthResponse,
            health::WelcomeResponse,
            crate::models::auth::LoginRequest,
            crate::models::auth::TokenResponse,
            crate::models::book::Book,
            crate::models::book::BookCondition,
            crate::models::book::CreateBook,
            books::BookPage,
            crate::models::bookstore::Bookstore,
            crate::models::bookstore::CreateBookstore,
            crate::models::bookstore::BookInventory,
            crate::models::bookstore::CreateBookInventory,
            crate::models::client::Client,
            crate::models::client::ClientPayload,
            crate::models::borrowing::Borrowing,
            crate::models::borrowing::BorrowingStatus,
            crate::models::borrowing::SourceType,
            crate::models::borrowing::CreateBorrowing,
            crate::models::sale::Sale,
            crate::models::sale::CreateSale,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "bookstores", description = "Bookstores and their inventory"),
        (name = "clients", description = "Client management"),
        (name = "borrowings", description = "Loans and returns"),
        (name = "sales", description = "Sales records")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
