use chrono::{Datelike, NaiveDate};
use clim_archive::location::Location;
use clim_data::AggregationParams;
use std::path::PathBuf;
use std::time::Duration;

/// First year of the historical window.
pub const HISTORICAL_START_YEAR: i32 = 1996;
/// Last year of the historical window.
pub const HISTORICAL_END_YEAR: i32 = 2025;
/// Years in the trailing average, ending at the last historical year.
pub const TRAILING_WINDOW: u32 = 10;
/// Pause after each successful historical fetch.
pub const PACING_DELAY: Duration = Duration::from_millis(300);
/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Where the document goes unless told otherwise.
pub const DEFAULT_OUTPUT: &str = "data.js";

/// Everything one run needs, fixed before the first request.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub location: Location,
    pub historical_start_year: i32,
    pub historical_end_year: i32,
    pub trailing_window: u32,
    pub today: NaiveDate,
    pub pacing_delay: Duration,
    pub request_timeout: Duration,
    pub output: PathBuf,
}

impl Config {
    pub fn denver(today: NaiveDate) -> Config {
        Config {
            location: Location::denver(),
            historical_start_year: HISTORICAL_START_YEAR,
            historical_end_year: HISTORICAL_END_YEAR,
            trailing_window: TRAILING_WINDOW,
            today,
            pacing_delay: PACING_DELAY,
            request_timeout: REQUEST_TIMEOUT,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Config {
        self.output = output.into();
        self
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }

    /// Historical years in fetch order.
    pub fn historical_years(&self) -> std::ops::RangeInclusive<i32> {
        self.historical_start_year..=self.historical_end_year
    }

    pub fn aggregation_params(&self) -> AggregationParams {
        AggregationParams {
            last_historical_year: self.historical_end_year,
            trailing_window: self.trailing_window,
        }
    }
}
