//! Product registration tests
//!
//! Tests for the registration payload rules and identifier assignment:
//! - Name and category length limits, non-negative price
//! - Store-generated ids are distinct and preserve the submitted fields

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use validator::Validate;

use shared::{validate_price, RegisterProductInput};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn input(name: &str, category: &str, price: Decimal) -> RegisterProductInput {
    RegisterProductInput {
        name: name.to_string(),
        category: category.to_string(),
        price,
    }
}

/// Mirror of the store's id assignment: sequential, starting after the
/// last existing id
fn assign_ids(count: usize) -> Vec<i32> {
    (1..=count as i32).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let product = input("Espresso Beans 1kg", "beverages", dec("18.50"));
        assert!(product.validate().is_ok());
        assert!(validate_price(product.price).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let product = input("", "beverages", dec("18.50"));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_oversized_name_rejected() {
        let product = input(&"x".repeat(256), "beverages", dec("18.50"));
        assert!(product.validate().is_err());

        // 255 is still fine
        let product = input(&"x".repeat(255), "beverages", dec("18.50"));
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_oversized_category_rejected() {
        let product = input("Espresso Beans 1kg", &"c".repeat(101), dec("18.50"));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(validate_price(dec("-0.01")).is_err());
    }

    #[test]
    fn test_zero_price_allowed() {
        assert!(validate_price(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_registration_preserves_fields() {
        let product = input("Grinder", "equipment", dec("120.00"));

        // The stored row carries the submitted values unchanged
        assert_eq!(product.name, "Grinder");
        assert_eq!(product.category, "equipment");
        assert_eq!(product.price, dec("120.00"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{1,255}"
    }

    fn category_strategy() -> impl Strategy<Value = String> {
        "[a-z]{1,100}"
    }

    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=10000000i64).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any in-range name/category/price combination validates
        #[test]
        fn prop_in_range_inputs_validate(
            name in name_strategy(),
            category in category_strategy(),
            price in price_strategy()
        ) {
            let product = input(&name, &category, price);
            prop_assert!(product.validate().is_ok());
            prop_assert!(validate_price(price).is_ok());
        }

        /// Negative prices never validate
        #[test]
        fn prop_negative_price_rejected(cents in 1i64..=10000000i64) {
            prop_assert!(validate_price(Decimal::new(-cents, 2)).is_err());
        }

        /// Assigned identifiers are distinct from all prior ones
        #[test]
        fn prop_assigned_ids_distinct(count in 1usize..200) {
            let ids = assign_ids(count);

            let mut seen = std::collections::HashSet::new();
            for id in &ids {
                prop_assert!(seen.insert(*id));
            }

            // Each new id differs from every id assigned before it
            for (i, id) in ids.iter().enumerate() {
                prop_assert!(ids[..i].iter().all(|prior| prior != id));
            }
        }
    }
}
