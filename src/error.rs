//! Error types surfaced while loading data or rendering a report.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AidError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid mob selection: {0}")]
    InvalidSelection(String),

    #[error("unknown report mode: {0}")]
    UnknownMode(String),

    /// Two deduplicated occurrences were not strictly increasing in time.
    #[error("non-positive interval of {gap_ms}ms at {at}")]
    IntegrityFault { at: NaiveDateTime, gap_ms: i64 },
}

pub type Result<T> = std::result::Result<T, AidError>;
