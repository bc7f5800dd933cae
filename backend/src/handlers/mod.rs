//! HTTP handlers for the Sales Insights Platform

pub mod health;
pub mod inventory;
pub mod products;
pub mod sales;

pub use health::*;
pub use inventory::*;
pub use products::*;
pub use sales::*;
