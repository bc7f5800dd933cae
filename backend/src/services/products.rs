//! Product registration service

use sqlx::PgPool;
use validator::Validate;

use shared::{validate_price, RegisterProductInput};

use crate::error::{AppError, AppResult};

/// Product service for catalog registration
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a new product and return its store-generated id
    ///
    /// No duplicate-name check and no category whitelist; the catalog
    /// accepts whatever passes shape validation.
    pub async fn register(&self, input: RegisterProductInput) -> AppResult<i32> {
        input.validate()?;

        if let Err(message) = validate_price(input.price) {
            return Err(AppError::Validation {
                field: "price".to_string(),
                message: message.to_string(),
            });
        }

        let product_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO products (name, category, price)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.price)
        .fetch_one(&self.db)
        .await?;

        Ok(product_id)
    }
}
