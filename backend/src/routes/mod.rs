//! Route definitions for the Sales Insights Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Sales queries and revenue aggregation
        .nest("/sales", sales_routes())
        // Product registration
        .nest("/products", product_routes())
        // Inventory status and stock updates
        .nest("/inventory", inventory_routes())
}

/// Sales routes
fn sales_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_sales))
        .route("/revenue", get(handlers::get_sales_revenue))
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new().route("/register", post(handlers::register_product))
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_inventory))
        .route("/update", post(handlers::update_inventory))
}
