//! Shared utility functions for the climatology crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date format used by the archive API for query parameters and responses: "YYYY-MM-DD"
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Full month names, January first.
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> chrono::ParseResult<NaiveDate> {
        NaiveDate::parse_from_str(s, ISO_FORMAT)
    }

    /// Full name of a 1-based month number.
    pub fn month_name(month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        MONTH_NAMES.get(index).copied()
    }

    /// Three letter abbreviation of a 1-based month number ("Jan", "Feb", ...).
    pub fn month_abbreviation(month: u32) -> Option<&'static str> {
        month_name(month).map(|name| &name[..3])
    }

}

/// Small numeric reductions shared by every aggregate.
pub mod stats {
    /// Round to one decimal place.
    ///
    /// Rounds the exact binary value, so `0.35` (stored just below the half)
    /// becomes `0.3`. Exact ties go to the even neighbour: `0.25` becomes
    /// `0.2`. Scaling by ten first would round an already-rounded product.
    pub fn round_tenth(value: f64) -> f64 {
        format!("{:.1}", value).parse().unwrap_or(value)
    }

    /// Arithmetic mean, `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        Some(sum / values.len() as f64)
    }

    /// Arithmetic mean rounded to one decimal place.
    pub fn rounded_mean(values: &[f64]) -> Option<f64> {
        mean(values).map(round_tenth)
    }

    /// Nearest-rank index for `fraction` over a sorted sample of length `len`:
    /// `clamp(floor(len * fraction), 0, len - 1)`.
    ///
    /// Returns `None` when the sample is empty.
    pub fn percentile_index(len: usize, fraction: f64) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let raw = (len as f64 * fraction).floor();
        let index = if raw <= 0.0 { 0 } else { raw as usize };
        Some(index.min(len - 1))
    }

    /// Value at `fraction` of an ascending slice, by nearest rank.
    pub fn percentile(sorted: &[f64], fraction: f64) -> Option<f64> {
        percentile_index(sorted.len(), fraction).map(|index| sorted[index])
    }

}
