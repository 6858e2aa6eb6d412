// File: crates/chart-core/src/error.rs
// Summary: Errors raised while turning API records into a time series.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("record {index} has no date, timestamp or last_updated field")]
    MissingTimestamp { index: usize },
    #[error("record {index} has an unreadable timestamp: {raw}")]
    InvalidTimestamp { index: usize, raw: String },
}
