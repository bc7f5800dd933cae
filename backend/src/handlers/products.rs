//! Product registration HTTP handlers

use axum::{extract::State, Json};

use shared::RegisterProductInput;

use crate::error::AppResult;
use crate::services::products::ProductService;
use crate::AppState;

/// Register a new product
pub async fn register_product(
    State(state): State<AppState>,
    Json(input): Json<RegisterProductInput>,
) -> AppResult<Json<serde_json::Value>> {
    let service = ProductService::new(state.db.clone());
    let product_id = service.register(input).await?;

    Ok(Json(serde_json::json!({
        "message": "Product registered successfully",
        "product_id": product_id,
    })))
}
