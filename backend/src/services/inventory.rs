//! Inventory status and stock level service

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use shared::UpdateInventoryInput;

use crate::error::{AppError, AppResult};

/// Threshold at or below which a stock level counts as low
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 10;

/// Inventory service for stock status and updates
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// An inventory row
///
/// Negative stock levels represent backorder.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InventoryItem {
    pub id: i32,
    pub product_id: i32,
    pub stock_level: i32,
}

/// Full inventory plus the low-stock subset
#[derive(Debug, Clone, Serialize)]
pub struct InventoryStatus {
    pub inventory: Vec<InventoryItem>,
    pub low_stock_alerts: Vec<InventoryItem>,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Current inventory and the rows at or below the threshold
    ///
    /// The two reads are independent snapshots; a write between them can
    /// make the subset inconsistent with the full set. Acceptable for a
    /// status view, not for decision-critical alerting.
    pub async fn get_status(&self, low_stock_threshold: i32) -> AppResult<InventoryStatus> {
        let inventory =
            sqlx::query_as::<_, InventoryItem>("SELECT id, product_id, stock_level FROM inventory")
                .fetch_all(&self.db)
                .await?;

        let low_stock_alerts = sqlx::query_as::<_, InventoryItem>(
            "SELECT id, product_id, stock_level FROM inventory WHERE stock_level <= $1",
        )
        .bind(low_stock_threshold)
        .fetch_all(&self.db)
        .await?;

        Ok(InventoryStatus {
            inventory,
            low_stock_alerts,
        })
    }

    /// Overwrite the stock level of a product's inventory row
    ///
    /// Targets the first row (lowest id) for the product in a single
    /// statement, so there is no read-then-write window. Rows are
    /// provisioned out of band; a missing row is an error, not an upsert.
    pub async fn update_stock(&self, input: &UpdateInventoryInput) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE inventory
            SET stock_level = $1
            WHERE id = (
                SELECT id FROM inventory
                WHERE product_id = $2
                ORDER BY id
                LIMIT 1
            )
            "#,
        )
        .bind(input.stock_level)
        .bind(input.product_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }
}
