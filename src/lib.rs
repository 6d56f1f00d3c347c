//! fiscal-periods: fiscal-period bucketing and date-range resolution.
//!
//! This crate is the arithmetic core of a reporting dashboard that overlays
//! sales and collections targets onto an April-anchored fiscal year. It
//! turns sparse period aggregates into complete, gap-filled, chart-ready
//! sequences, resolves abstract period labels into concrete drill-down date
//! ranges, and selects the target representing "now". Every operation is a
//! pure function of its inputs plus an injected current date; nothing here
//! fetches, caches, persists, or renders.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{
    ActualsSummary, Bucket, DateRange, FiscalYear, PeriodKind, Quarter, Target, TargetPeriod,
};
pub use crate::error::{FiscalError, FiscalResult};
