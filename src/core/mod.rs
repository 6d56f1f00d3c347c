pub mod calendar;
pub mod current;
pub mod fill;
pub mod resolve;
pub mod types;

pub use calendar::{FiscalYear, Quarter};
pub use current::{
    find_current_monthly, find_current_quarterly, find_current_weekly, find_current_yearly,
};
pub use fill::{fill_monthly, fill_quarterly, fill_weekly, fill_yearly};
pub use resolve::{resolve_from_bucket, resolve_from_target, resolve_from_tokens};
pub use types::{ActualsSummary, Bucket, DateRange, PeriodKind, Target, TargetPeriod};
