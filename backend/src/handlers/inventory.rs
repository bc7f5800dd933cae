//! Inventory HTTP handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::UpdateInventoryInput;

use crate::error::AppResult;
use crate::services::inventory::{InventoryService, InventoryStatus, DEFAULT_LOW_STOCK_THRESHOLD};
use crate::AppState;

/// Query parameters for the inventory status view
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub low_stock_threshold: Option<i32>,
}

/// Current inventory with low-stock alerts
pub async fn get_inventory(
    State(state): State<AppState>,
    Query(params): Query<InventoryQuery>,
) -> AppResult<Json<InventoryStatus>> {
    let threshold = params
        .low_stock_threshold
        .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);

    let service = InventoryService::new(state.db.clone());
    let status = service.get_status(threshold).await?;
    Ok(Json(status))
}

/// Overwrite a product's stock level
pub async fn update_inventory(
    State(state): State<AppState>,
    Json(input): Json<UpdateInventoryInput>,
) -> AppResult<Json<serde_json::Value>> {
    let service = InventoryService::new(state.db.clone());
    service.update_stock(&input).await?;

    Ok(Json(serde_json::json!({ "message": "Inventory updated" })))
}
