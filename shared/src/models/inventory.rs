//! Inventory payloads

use serde::Deserialize;

/// Inbound payload for overwriting a product's stock level
///
/// `stock_level` is an absolute value, not a delta. Zero and negative
/// levels are valid; negative represents backorder.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInventoryInput {
    pub product_id: i32,
    pub stock_level: i32,
}
