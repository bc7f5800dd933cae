//! Request payload shapes for the Sales Insights Platform

mod inventory;
mod product;
mod sale;

pub use inventory::*;
pub use product::*;
pub use sale::*;
