//! Business logic services for the Sales Insights Platform

pub mod inventory;
pub mod products;
pub mod sales;

pub use inventory::InventoryService;
pub use products::ProductService;
pub use sales::SalesService;
