//! API route configuration.

use crate::api::handlers::{
    create_customer_handler, delete_customer_handler, get_customer_handler, health_handler,
    list_customers_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Customer resource routes.
///
/// # Endpoints
///
/// - `GET    /customers`        - List all customers
/// - `POST   /customers`        - Create a customer
/// - `GET    /customers/{id}`   - Fetch one customer
/// - `DELETE /customers/{id}`   - Delete a customer
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(list_customers_handler).post(create_customer_handler),
        )
        .route(
            "/customers/{id}",
            get(get_customer_handler).delete(delete_customer_handler),
        )
}

/// Operational routes.
///
/// - `GET /health` - Storage health check
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
