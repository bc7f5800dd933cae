//! Inventory endpoint tests
//!
//! Tests for the status view and the stock update:
//! - low_stock_alerts is a subset of inventory, every entry at or below
//!   the threshold
//! - The update overwrites exactly one row and fails cleanly for a
//!   product with no inventory row

use proptest::prelude::*;

/// An inventory row as the status view sees it
#[derive(Debug, Clone, PartialEq, Eq)]
struct InventoryRow {
    id: i32,
    product_id: i32,
    stock_level: i32,
}

/// Mirror of the status view's second query
fn low_stock(rows: &[InventoryRow], threshold: i32) -> Vec<InventoryRow> {
    rows.iter()
        .filter(|row| row.stock_level <= threshold)
        .cloned()
        .collect()
}

/// Mirror of the atomic update: overwrite the first row (lowest id) for
/// the product, error when no row exists
fn apply_stock_update(
    rows: &mut [InventoryRow],
    product_id: i32,
    stock_level: i32,
) -> Result<(), &'static str> {
    let target = rows
        .iter_mut()
        .filter(|row| row.product_id == product_id)
        .min_by_key(|row| row.id);

    match target {
        Some(row) => {
            row.stock_level = stock_level;
            Ok(())
        }
        None => Err("Product not found"),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn sample_rows() -> Vec<InventoryRow> {
        vec![
            InventoryRow {
                id: 1,
                product_id: 1,
                stock_level: 3,
            },
            InventoryRow {
                id: 2,
                product_id: 2,
                stock_level: 10,
            },
            InventoryRow {
                id: 3,
                product_id: 3,
                stock_level: 11,
            },
            InventoryRow {
                id: 4,
                product_id: 4,
                stock_level: -2,
            },
        ]
    }

    /// The default threshold of 10 includes levels at exactly 10
    #[test]
    fn test_default_threshold_boundary() {
        let rows = sample_rows();
        let alerts = low_stock(&rows, 10);

        let alerted: Vec<i32> = alerts.iter().map(|r| r.product_id).collect();
        assert_eq!(alerted, vec![1, 2, 4]);
    }

    /// Negative stock (backorder) always counts as low for any
    /// non-negative threshold
    #[test]
    fn test_backorder_counts_as_low() {
        let rows = sample_rows();
        let alerts = low_stock(&rows, 0);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].product_id, 4);
    }

    #[test]
    fn test_update_overwrites_existing_row() {
        let mut rows = sample_rows();
        apply_stock_update(&mut rows, 2, 50).unwrap();

        assert_eq!(rows[1].stock_level, 50);
        // Other rows untouched
        assert_eq!(rows[0].stock_level, 3);
        assert_eq!(rows[2].stock_level, 11);
    }

    /// The update is absolute, not a delta, and accepts negative levels
    #[test]
    fn test_update_accepts_negative_level() {
        let mut rows = sample_rows();
        apply_stock_update(&mut rows, 2, -5).unwrap();
        assert_eq!(rows[1].stock_level, -5);
    }

    #[test]
    fn test_update_targets_first_row_for_product() {
        let mut rows = vec![
            InventoryRow {
                id: 7,
                product_id: 9,
                stock_level: 1,
            },
            InventoryRow {
                id: 3,
                product_id: 9,
                stock_level: 2,
            },
        ];
        apply_stock_update(&mut rows, 9, 99).unwrap();

        // The lowest id wins, regardless of slice order
        assert_eq!(rows[1].stock_level, 99);
        assert_eq!(rows[0].stock_level, 1);
    }

    #[test]
    fn test_update_missing_product_leaves_store_unchanged() {
        let mut rows = sample_rows();
        let before = rows.clone();

        let result = apply_stock_update(&mut rows, 999, 50);

        assert!(result.is_err());
        assert_eq!(rows, before);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn rows_strategy() -> impl Strategy<Value = Vec<InventoryRow>> {
        prop::collection::vec((1i32..=20, -50i32..=200), 0..20).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (product_id, stock_level))| InventoryRow {
                    id: i as i32 + 1,
                    product_id,
                    stock_level,
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Alerts are a subset of inventory and all at or below the
        /// threshold
        #[test]
        fn prop_alerts_subset_and_bounded(
            rows in rows_strategy(),
            threshold in -10i32..=50
        ) {
            let alerts = low_stock(&rows, threshold);

            prop_assert!(alerts.len() <= rows.len());
            for alert in &alerts {
                prop_assert!(alert.stock_level <= threshold);
                prop_assert!(rows.contains(alert));
            }
        }

        /// Every row at or below the threshold appears in the alerts
        #[test]
        fn prop_alerts_complete(
            rows in rows_strategy(),
            threshold in -10i32..=50
        ) {
            let alerts = low_stock(&rows, threshold);

            for row in &rows {
                if row.stock_level <= threshold {
                    prop_assert!(alerts.contains(row));
                }
            }
        }

        /// A successful update changes exactly one row
        #[test]
        fn prop_update_touches_one_row(
            rows in rows_strategy(),
            product_id in 1i32..=20,
            stock_level in -50i32..=200
        ) {
            let mut updated = rows.clone();
            let result = apply_stock_update(&mut updated, product_id, stock_level);

            let changed: Vec<usize> = rows
                .iter()
                .zip(updated.iter())
                .enumerate()
                .filter(|(_, (before, after))| before != after)
                .map(|(i, _)| i)
                .collect();

            match result {
                Ok(()) => {
                    prop_assert!(changed.len() <= 1);
                    if let Some(&i) = changed.first() {
                        prop_assert_eq!(updated[i].product_id, product_id);
                        prop_assert_eq!(updated[i].stock_level, stock_level);
                    }
                }
                Err(_) => prop_assert!(changed.is_empty()),
            }
        }
    }
}
