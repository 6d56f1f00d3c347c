//! Wire-facing data model for buckets, targets, and drill-down ranges.
//!
//! Shapes mirror the JSON exchanged with the data-fetch and navigation
//! collaborators: camelCase field names, ISO `YYYY-MM-DD` dates, 4-digit
//! fiscal-year labels. Buckets are immutable snapshots; fillers copy and
//! augment, never mutate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::calendar::FiscalYear;
use crate::error::{FiscalError, FiscalResult};

/// Granularity of one aggregation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl PeriodKind {
    /// Parses a raw period-type token from the wire.
    pub fn from_token(token: &str) -> FiscalResult<Self> {
        match token.to_ascii_lowercase().as_str() {
            "daily" => Ok(PeriodKind::Daily),
            "weekly" => Ok(PeriodKind::Weekly),
            "monthly" => Ok(PeriodKind::Monthly),
            "quarterly" => Ok(PeriodKind::Quarterly),
            "yearly" => Ok(PeriodKind::Yearly),
            _ => Err(FiscalError::UnknownPeriodType {
                token: token.to_owned(),
            }),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodKind::Daily => "daily",
            PeriodKind::Weekly => "weekly",
            PeriodKind::Monthly => "monthly",
            PeriodKind::Quarterly => "quarterly",
            PeriodKind::Yearly => "yearly",
        }
    }
}

/// One aggregation slot holding a count and summed amount of matching
/// underlying records.
///
/// `bucket_name` encoding depends on `bucket_type`: ISO date for
/// daily/weekly, full English month name for monthly, `"Qn (Mon-Mon)"`
/// token for quarterly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub bucket_name: String,
    pub bucket_type: PeriodKind,
    pub record_count: u64,
    pub total_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    // The sales and collections wire families name the id list differently;
    // both collapse onto the single field here.
    #[serde(
        rename = "idList",
        alias = "salesIdList",
        alias = "collectionsIdList",
        default
    )]
    pub id_list: Vec<String>,
}

impl Bucket {
    /// Zero-valued stand-in for a slot with no source data.
    #[must_use]
    pub fn placeholder(bucket_name: impl Into<String>, bucket_type: PeriodKind, label: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            bucket_type,
            record_count: 0,
            total_amount: Decimal::ZERO,
            label: Some(label.into()),
            id_list: Vec::new(),
        }
    }

    /// Copy of this bucket with a display label attached. Amounts, counts,
    /// and id lists pass through untouched.
    #[must_use]
    pub fn labeled(&self, label: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.label = Some(label.into());
        copy
    }
}

/// Period a quota record covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPeriod {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl TargetPeriod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TargetPeriod::Weekly => "weekly",
            TargetPeriod::Monthly => "monthly",
            TargetPeriod::Quarterly => "quarterly",
            TargetPeriod::Yearly => "yearly",
        }
    }
}

/// Rolled-up actuals carried alongside a target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualsSummary {
    pub record_count: u64,
    pub total_amount: Decimal,
    #[serde(
        rename = "idList",
        alias = "salesIdList",
        alias = "collectionsIdList",
        default
    )]
    pub id_list: Vec<String>,
}

/// Quota/goal record for one period.
///
/// Exactly one of the period-specific fields (`week_start_date` and
/// `week_end_date`, `month`, `quarter`, `fiscal_year`) is populated,
/// selected by `target_period`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub target_period: TargetPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<FiscalYear>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarter: Option<String>,
    #[serde(default)]
    pub actuals_summary: ActualsSummary,
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

/// Concrete calendar span handed to the navigation layer for drill-down
/// queries. Serializes as the `{startDate, endDate}` ISO pair the wire
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate")]
    pub start: NaiveDate,
    #[serde(rename = "endDate")]
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Query-parameter pairs for the navigation layer.
    #[must_use]
    pub fn as_query_params(self) -> [(&'static str, String); 2] {
        [
            ("startDate", self.start.to_string()),
            ("endDate", self.end.to_string()),
        ]
    }
}
