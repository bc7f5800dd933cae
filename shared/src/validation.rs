//! Validation utilities for the Sales Insights Platform

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The one date pattern accepted by every date query parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error for a date string that does not match [`DATE_FORMAT`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid date '{0}'. Expected format YYYY-MM-DD")]
pub struct ParseDateError(pub String);

/// Parse a date parameter using the fixed `YYYY-MM-DD` pattern
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseDateError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ParseDateError(value.to_string()))
}

/// Validate that a monetary value is non-negative
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate that a sale quantity is positive
pub fn validate_quantity(quantity: i32) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}
