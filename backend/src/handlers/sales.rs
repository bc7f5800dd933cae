//! Sales query and revenue aggregation HTTP handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::{parse_date, DateRange, Period};

use crate::error::AppResult;
use crate::services::sales::{RevenueReport, Sale, SalesFilter, SalesService};
use crate::AppState;

/// Query parameters for the sales listing
#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub product_id: Option<i32>,
    pub category: Option<String>,
}

/// Query parameters for revenue aggregation
#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    pub period: Option<String>,
    pub compare_period: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// List sales filtered by date range, product, and category
pub async fn get_sales(
    State(state): State<AppState>,
    Query(params): Query<SalesQuery>,
) -> AppResult<Json<Vec<Sale>>> {
    let filter = SalesFilter {
        date_range: parse_range(params.start_date.as_deref(), params.end_date.as_deref())?,
        product_id: params.product_id,
        category: params.category,
    };

    let service = SalesService::new(state.db.clone());
    let sales = service.get_sales(&filter).await?;
    Ok(Json(sales))
}

/// Aggregate revenue by period, with an optional comparison period
pub async fn get_sales_revenue(
    State(state): State<AppState>,
    Query(params): Query<RevenueQuery>,
) -> AppResult<Json<RevenueReport>> {
    let period = match params.period.as_deref() {
        Some(value) => value.parse::<Period>()?,
        None => Period::default(),
    };
    let compare_period = params
        .compare_period
        .as_deref()
        .map(str::parse::<Period>)
        .transpose()?;

    let filter = SalesFilter {
        date_range: parse_range(params.start_date.as_deref(), params.end_date.as_deref())?,
        product_id: None,
        category: params.category,
    };

    let service = SalesService::new(state.db.clone());
    let report = service.get_revenue(period, compare_period, &filter).await?;
    Ok(Json(report))
}

/// The date range applies only when both bounds are present
fn parse_range(start: Option<&str>, end: Option<&str>) -> AppResult<Option<DateRange>> {
    match (start, end) {
        (Some(start), Some(end)) => Ok(Some(DateRange {
            start: parse_date(start)?,
            end: parse_date(end)?,
        })),
        _ => Ok(None),
    }
}
