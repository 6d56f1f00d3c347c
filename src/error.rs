use thiserror::Error;

pub type FiscalResult<T> = Result<T, FiscalError>;

#[derive(Debug, Error)]
pub enum FiscalError {
    #[error("unrecognized period type token: {token}")]
    UnknownPeriodType { token: String },

    #[error("quarter token does not carry a Q1..Q4 marker: {token}")]
    InvalidQuarterToken { token: String },

    #[error("unrecognized English month name: {name}")]
    UnknownMonth { name: String },

    #[error("invalid calendar date: {value}")]
    InvalidDate { value: String },

    #[error("fiscal year label must be a 4-digit numeric string: {label}")]
    InvalidFiscalYear { label: String },

    #[error("target {id} is missing the {field} field required for {period} resolution")]
    IncompleteTarget {
        id: String,
        field: &'static str,
        period: &'static str,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
