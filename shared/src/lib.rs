//! Shared types and models for the Sales Insights Platform
//!
//! This crate contains the request payload shapes and common types used by
//! the backend API surface.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
