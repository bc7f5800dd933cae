//! Product registration payloads

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Inbound payload for registering a new product
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterProductInput {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    /// Non-negative monetary value; checked by the registration service
    pub price: Decimal,
}
