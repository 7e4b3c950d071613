/// Error types for the archive library
use chrono::NaiveDate;
use thiserror::Error;

/// HTTP statuses the archive uses to ask callers to slow down.
pub const RATE_LIMIT_STATUSES: [u16; 2] = [429, 503];

/// Main error type for archive operations
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The archive answered with a non-success status
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Failed to parse the JSON response body
    #[error("Failed to parse archive response: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// A date in the response was not "YYYY-MM-DD"
    #[error("Failed to parse date {0:?}: {1}")]
    DateParse(String, #[source] chrono::ParseError),

    /// Value columns do not line up with the date column
    #[error("Column length mismatch: {dates} dates, {highs} highs, {lows} lows")]
    MismatchedColumns {
        dates: usize,
        highs: usize,
        lows: usize,
    },

    /// The year cannot be represented as a calendar date
    #[error("Year {0} is out of range")]
    InvalidYear(i32),

    /// Every attempt for a date range failed
    #[error("All {attempts} attempts failed for {start} to {end}")]
    RetriesExhausted {
        start: NaiveDate,
        end: NaiveDate,
        attempts: u32,
    },
}

impl ArchiveError {
    /// True when the archive signalled rate limiting or a busy server.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ArchiveError::HttpStatus { status, .. } if RATE_LIMIT_STATUSES.contains(status))
    }
}
