//! Sales queries and revenue aggregation

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use shared::{DateRange, Period};

use crate::error::AppResult;

/// Sales service for filtered listings and revenue reports
#[derive(Clone)]
pub struct SalesService {
    db: PgPool,
}

/// A recorded sale
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sale {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub date: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Optional filters shared by the sales listing and the revenue report
#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    /// Applied only when both bounds were supplied; inclusive of both days
    pub date_range: Option<DateRange>,
    pub product_id: Option<i32>,
    pub category: Option<String>,
}

/// One revenue bucket
#[derive(Debug, Clone, Serialize)]
pub struct RevenueBucket {
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

/// Revenue grouped by period, with an optional comparison grouping
#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub period: Period,
    pub main_data: Vec<RevenueBucket>,
    pub comparison_period: Option<Period>,
    pub comparison_data: Vec<RevenueBucket>,
}

/// Row for the grouped revenue query
#[derive(Debug, FromRow)]
struct RevenueRow {
    bucket: String,
    total_revenue: Decimal,
}

/// SQL expression producing the bucket label for a granularity.
///
/// Daily buckets are full calendar dates; the other granularities extract
/// the calendar part, so weekly/monthly buckets aggregate across years.
fn bucket_expression(period: Period) -> &'static str {
    match period {
        Period::Daily => "TO_CHAR(s.sale_date, 'YYYY-MM-DD')",
        Period::Weekly => "TO_CHAR(s.sale_date, 'IW')",
        Period::Monthly => "TO_CHAR(s.sale_date, 'MM')",
        Period::Annually => "TO_CHAR(s.sale_date, 'YYYY')",
    }
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List sales, applying date range, product, and category filters
    ///
    /// Returns the full matching set; callers asked for no ordering,
    /// pagination, or row cap.
    pub async fn get_sales(&self, filter: &SalesFilter) -> AppResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT s.id, s.product_id, s.quantity, s.sale_date AS date, s.revenue
            FROM sales s
            LEFT JOIN products p ON p.id = s.product_id
            WHERE ($1::date IS NULL OR s.sale_date::date >= $1)
              AND ($2::date IS NULL OR s.sale_date::date <= $2)
              AND ($3::integer IS NULL OR s.product_id = $3)
              AND ($4::text IS NULL OR p.category = $4)
            "#,
        )
        .bind(filter.date_range.map(|r| r.start))
        .bind(filter.date_range.map(|r| r.end))
        .bind(filter.product_id)
        .bind(filter.category.as_deref())
        .fetch_all(&self.db)
        .await?;

        Ok(sales)
    }

    /// Sum revenue per bucket of the requested granularity, optionally
    /// running the same filtered query a second time with a comparison
    /// granularity
    pub async fn get_revenue(
        &self,
        period: Period,
        compare_period: Option<Period>,
        filter: &SalesFilter,
    ) -> AppResult<RevenueReport> {
        let main_data = self.grouped_revenue(period, filter).await?;

        let comparison_data = match compare_period {
            Some(compare) => self.grouped_revenue(compare, filter).await?,
            None => Vec::new(),
        };

        Ok(RevenueReport {
            period,
            main_data,
            comparison_period: compare_period,
            comparison_data,
        })
    }

    async fn grouped_revenue(
        &self,
        period: Period,
        filter: &SalesFilter,
    ) -> AppResult<Vec<RevenueBucket>> {
        // bucket_expression returns a fixed literal per granularity, so the
        // formatted query carries no request data
        let bucket = bucket_expression(period);
        let query = format!(
            r#"
            SELECT {bucket} AS bucket, SUM(s.revenue) AS total_revenue
            FROM sales s
            LEFT JOIN products p ON p.id = s.product_id
            WHERE ($1::text IS NULL OR p.category = $1)
              AND ($2::date IS NULL OR s.sale_date::date >= $2)
              AND ($3::date IS NULL OR s.sale_date::date <= $3)
            GROUP BY {bucket}
            ORDER BY bucket ASC
            "#
        );

        let rows = sqlx::query_as::<_, RevenueRow>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.date_range.map(|r| r.start))
            .bind(filter.date_range.map(|r| r.end))
            .fetch_all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| RevenueBucket {
                date: row.bucket,
                total_revenue: row.total_revenue,
            })
            .collect())
    }
}
