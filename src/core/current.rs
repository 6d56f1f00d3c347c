//! "What period is now" selection.
//!
//! Given the fetched targets for a period family and an injected `today`,
//! picks the one target representing the current period. Absence of a match
//! is `None` — "no data for the current period" — never an error; the tile
//! layer renders it as empty.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::core::calendar::{FiscalYear, MONTH_NAMES, Quarter};
use crate::core::types::Target;

/// First target whose `[week_start_date, week_end_date]` interval contains
/// `today`, inclusive on both ends.
#[must_use]
pub fn find_current_weekly(targets: &[Target], today: NaiveDate) -> Option<&Target> {
    let found = targets.iter().find(|target| {
        match (target.week_start_date, target.week_end_date) {
            (Some(start), Some(end)) => start <= today && today <= end,
            _ => false,
        }
    });
    trace!(%today, found = found.is_some(), "current weekly target lookup");
    found
}

/// Target whose `month` equals the English month name of `today`.
#[must_use]
pub fn find_current_monthly(targets: &[Target], today: NaiveDate) -> Option<&Target> {
    let month = MONTH_NAMES[today.month0() as usize];
    targets
        .iter()
        .find(|target| target.month.as_deref() == Some(month))
}

/// Target whose `quarter` token matches the fiscal quarter containing
/// `today`.
#[must_use]
pub fn find_current_quarterly(targets: &[Target], today: NaiveDate) -> Option<&Target> {
    let token = Quarter::containing(today).token();
    targets
        .iter()
        .find(|target| target.quarter.as_deref() == Some(token))
}

/// Target whose `fiscal_year` label matches the fiscal year containing
/// `today` (April or later → the current calendar year, January through
/// March → the year before).
#[must_use]
pub fn find_current_yearly(targets: &[Target], today: NaiveDate) -> Option<&Target> {
    let fiscal_year = FiscalYear::containing(today);
    targets
        .iter()
        .find(|target| target.fiscal_year == Some(fiscal_year))
}
