//! Versioned JSON contracts with the data-fetch and navigation layers.
//!
//! The data-fetch collaborator delivers bucket/target arrays either bare or
//! wrapped in a schema-versioned envelope; parsing accepts both. Output
//! helpers produce the pretty JSON the rendering and navigation layers
//! consume.

use serde::{Deserialize, Serialize};

use crate::core::types::{Bucket, DateRange, Target};
use crate::error::{FiscalError, FiscalResult};

pub const TARGETS_JSON_SCHEMA_V1: u32 = 1;
pub const BUCKETS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetsJsonContractV1 {
    pub schema_version: u32,
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketsJsonContractV1 {
    pub schema_version: u32,
    pub buckets: Vec<Bucket>,
}

/// Parses a target array from either the bare shape or the v1 envelope.
pub fn targets_from_json_compat_str(input: &str) -> FiscalResult<Vec<Target>> {
    if let Ok(targets) = serde_json::from_str::<Vec<Target>>(input) {
        return Ok(targets);
    }
    let payload: TargetsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        FiscalError::InvalidData(format!("failed to parse targets json payload: {e}"))
    })?;
    if payload.schema_version != TARGETS_JSON_SCHEMA_V1 {
        return Err(FiscalError::InvalidData(format!(
            "unsupported targets schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.targets)
}

/// Parses a bucket array from either the bare shape or the v1 envelope.
pub fn buckets_from_json_compat_str(input: &str) -> FiscalResult<Vec<Bucket>> {
    if let Ok(buckets) = serde_json::from_str::<Vec<Bucket>>(input) {
        return Ok(buckets);
    }
    let payload: BucketsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        FiscalError::InvalidData(format!("failed to parse buckets json payload: {e}"))
    })?;
    if payload.schema_version != BUCKETS_JSON_SCHEMA_V1 {
        return Err(FiscalError::InvalidData(format!(
            "unsupported buckets schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.buckets)
}

/// Serializes a filled, chart-ready sequence for the rendering layer.
pub fn filled_sequence_to_json_pretty(buckets: &[Bucket]) -> FiscalResult<String> {
    serde_json::to_string_pretty(buckets)
        .map_err(|e| FiscalError::InvalidData(format!("failed to serialize filled sequence: {e}")))
}

impl DateRange {
    /// Pretty `{startDate, endDate}` pair for the navigation layer.
    pub fn to_json_pretty(self) -> FiscalResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| FiscalError::InvalidData(format!("failed to serialize date range: {e}")))
    }
}
