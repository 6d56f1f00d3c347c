//! Gap filling for sparse period aggregates.
//!
//! Each filler takes the sparse buckets a collaborator fetched, matches them
//! against the canonical slots of the displayed period, and returns a
//! complete, ordered, labeled sequence safe to feed directly into a chart.
//! Inputs are never mutated; matched buckets are copied with only a display
//! label added, unmatched slots become zero-valued placeholders.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::{debug, warn};

use crate::core::calendar::{Quarter, end_of_month, month_abbrev, start_of_week};
use crate::core::types::{Bucket, PeriodKind};

/// Weekday labels in display order, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Fills a week of daily buckets: exactly 7 entries, Sunday through
/// Saturday.
///
/// A bucket matches a weekday slot when its `bucket_name` parses as an ISO
/// date falling on that weekday. Unparsable names are treated as non-matches,
/// never as errors. Placeholder slots keep an empty `bucket_name`.
#[must_use]
pub fn fill_weekly(buckets: &[Bucket]) -> Vec<Bucket> {
    let parsed: Vec<(Option<NaiveDate>, &Bucket)> = buckets
        .iter()
        .map(|bucket| {
            let date = bucket.bucket_name.parse::<NaiveDate>().ok();
            if date.is_none() {
                warn!(
                    bucket_name = %bucket.bucket_name,
                    "unparsable daily bucket name treated as no match"
                );
            }
            (date, bucket)
        })
        .collect();

    let mut filled = Vec::with_capacity(WEEKDAY_LABELS.len());
    for (day, label) in WEEKDAY_LABELS.iter().enumerate() {
        let matched = parsed.iter().find(|(date, _)| {
            date.is_some_and(|d| d.weekday().num_days_from_sunday() as usize == day)
        });
        filled.push(match matched {
            Some((_, bucket)) => bucket.labeled(*label),
            None => Bucket::placeholder("", PeriodKind::Daily, *label),
        });
    }

    debug!(
        input_count = buckets.len(),
        matched_count = filled.iter().filter(|b| !b.bucket_name.is_empty()).count(),
        "filled weekly sequence"
    );
    filled
}

/// Fills a month of Sunday-aligned weekly buckets, from the week containing
/// the first of the month through the end of the month.
///
/// When the opening week would start before the fiscal year does, the first
/// cursor is shifted to `fiscal_year_start` rather than truncated to a
/// partial week; subsequent weeks realign to Sundays. Matching is by exact
/// ISO week-start `bucket_name`.
#[must_use]
pub fn fill_monthly(
    buckets: &[Bucket],
    month_start: NaiveDate,
    fiscal_year_start: NaiveDate,
) -> Vec<Bucket> {
    let month_end = end_of_month(month_start);
    let mut cursor = start_of_week(month_start);
    if cursor < fiscal_year_start {
        cursor = fiscal_year_start;
    }

    let mut filled = Vec::new();
    while cursor <= month_end {
        let key = cursor.to_string();
        let label = format!("{cursor} - {}", cursor + Duration::days(6));
        filled.push(match buckets.iter().find(|b| b.bucket_name == key) {
            Some(bucket) => bucket.labeled(label),
            None => Bucket::placeholder(key, PeriodKind::Weekly, label),
        });
        cursor = start_of_week(cursor) + Duration::days(7);
    }

    debug!(
        input_count = buckets.len(),
        week_count = filled.len(),
        %month_start,
        "filled monthly sequence"
    );
    filled
}

/// Fills a quarter of monthly buckets: exactly 3 entries, one per canonical
/// month of the quarter, in calendar order, labeled with the 3-letter month
/// abbreviation. Matching is by full English month name.
#[must_use]
pub fn fill_quarterly(buckets: &[Bucket], quarter: Quarter) -> Vec<Bucket> {
    let filled: Vec<Bucket> = quarter
        .months()
        .into_iter()
        .map(|month| {
            let label = month_abbrev(month);
            match buckets.iter().find(|b| b.bucket_name == month) {
                Some(bucket) => bucket.labeled(label),
                None => Bucket::placeholder(month, PeriodKind::Monthly, label),
            }
        })
        .collect();

    debug!(
        input_count = buckets.len(),
        quarter = quarter.short(),
        "filled quarterly sequence"
    );
    filled
}

/// Fills a fiscal year of quarterly buckets: exactly 4 entries in order
/// Q1..Q4, labeled with the short quarter name. Matching is by full quarter
/// token.
#[must_use]
pub fn fill_yearly(buckets: &[Bucket]) -> Vec<Bucket> {
    let filled: Vec<Bucket> = Quarter::ALL
        .into_iter()
        .map(|quarter| {
            match buckets.iter().find(|b| b.bucket_name == quarter.token()) {
                Some(bucket) => bucket.labeled(quarter.short()),
                None => Bucket::placeholder(quarter.token(), PeriodKind::Quarterly, quarter.short()),
            }
        })
        .collect();

    debug!(input_count = buckets.len(), "filled yearly sequence");
    filled
}
