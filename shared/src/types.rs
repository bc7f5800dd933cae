//! Common types used across the platform

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Revenue aggregation granularity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Annually,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Annually => "annually",
        }
    }
}

/// Error for a period string outside the known granularities
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid period '{0}'. Choose from daily, weekly, monthly, annually")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            "annually" => Ok(Period::Annually),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}

/// Date range for queries, inclusive of both calendar days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}
