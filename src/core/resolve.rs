//! Drill-down range resolution.
//!
//! Maps an abstract period — a raw bucket label or a full target record —
//! plus a fiscal-year context to the concrete calendar `{startDate, endDate}`
//! pair the navigation layer appends to detail queries.

use chrono::{Duration, NaiveDate};

use crate::core::calendar::{FiscalYear, Quarter, month_index, month_range};
use crate::core::types::{Bucket, DateRange, PeriodKind, Target, TargetPeriod};
use crate::error::{FiscalError, FiscalResult};

/// Resolves the calendar span behind a bucket the user clicked.
///
/// The `bucket_name` is interpreted per the bucket's granularity: ISO date
/// for daily/weekly, full English month name for monthly, `"Qn (Mon-Mon)"`
/// token for quarterly. Monthly names resolve within the fiscal-year label's
/// own calendar year; quarterly tokens follow the fiscal taxonomy, so Q4
/// rolls into the year after the label.
pub fn resolve_from_bucket(bucket: &Bucket, fiscal_year: FiscalYear) -> FiscalResult<DateRange> {
    resolve_period(bucket.bucket_type, &bucket.bucket_name, fiscal_year)
}

/// Resolves from raw wire tokens, for callers still holding unparsed
/// strings. Rejects unrecognized period-type tokens.
pub fn resolve_from_tokens(
    bucket_name: &str,
    bucket_type: &str,
    fiscal_year: FiscalYear,
) -> FiscalResult<DateRange> {
    let kind = PeriodKind::from_token(bucket_type)?;
    resolve_period(kind, bucket_name, fiscal_year)
}

fn resolve_period(
    kind: PeriodKind,
    bucket_name: &str,
    fiscal_year: FiscalYear,
) -> FiscalResult<DateRange> {
    match kind {
        PeriodKind::Daily => {
            let date = parse_iso_date(bucket_name)?;
            Ok(DateRange {
                start: date,
                end: date,
            })
        }
        PeriodKind::Weekly => {
            let start = parse_iso_date(bucket_name)?;
            Ok(DateRange {
                start,
                end: start + Duration::days(6),
            })
        }
        PeriodKind::Monthly => {
            let index = month_index(bucket_name).ok_or_else(|| FiscalError::UnknownMonth {
                name: bucket_name.to_owned(),
            })?;
            Ok(month_range(fiscal_year.year(), index))
        }
        PeriodKind::Quarterly => Ok(Quarter::from_token(bucket_name)?.date_range(fiscal_year)),
        PeriodKind::Yearly => Ok(fiscal_year.date_range()),
    }
}

/// Resolves the calendar span behind a summary tile, reading the explicit
/// period fields the target carries instead of re-deriving them from a
/// label.
///
/// Targets may omit their own fiscal-year label; the caller supplies the
/// displayed fiscal year as the fallback.
pub fn resolve_from_target(
    target: &Target,
    fallback_fiscal_year: FiscalYear,
) -> FiscalResult<DateRange> {
    let fiscal_year = target.fiscal_year.unwrap_or(fallback_fiscal_year);
    match target.target_period {
        TargetPeriod::Weekly => {
            let start = require_field(target, target.week_start_date, "weekStartDate")?;
            let end = require_field(target, target.week_end_date, "weekEndDate")?;
            Ok(DateRange { start, end })
        }
        TargetPeriod::Monthly => {
            let month = require_field(target, target.month.as_deref(), "month")?;
            let index = month_index(month).ok_or_else(|| FiscalError::UnknownMonth {
                name: month.to_owned(),
            })?;
            Ok(month_range(fiscal_year.year(), index))
        }
        TargetPeriod::Quarterly => {
            let quarter = require_field(target, target.quarter.as_deref(), "quarter")?;
            Ok(Quarter::from_token(quarter)?.date_range(fiscal_year))
        }
        TargetPeriod::Yearly => Ok(fiscal_year.date_range()),
    }
}

fn require_field<T>(target: &Target, value: Option<T>, field: &'static str) -> FiscalResult<T> {
    value.ok_or_else(|| FiscalError::IncompleteTarget {
        id: target.id.clone(),
        field,
        period: target.target_period.as_str(),
    })
}

fn parse_iso_date(value: &str) -> FiscalResult<NaiveDate> {
    value
        .parse::<NaiveDate>()
        .map_err(|_| FiscalError::InvalidDate {
            value: value.to_owned(),
        })
}
