//! Sale payloads
//!
//! Sales are append-only and read-mostly; no endpoint writes them today,
//! but the payload shape is part of the API surface for callers that seed
//! the store.

use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

/// Inbound payload for recording a sale
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordSaleInput {
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,

    pub date: NaiveDateTime,
}
