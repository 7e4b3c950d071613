use crate::date_range::DateRange;
use crate::error::ArchiveError;
use crate::observation::YearSeries;
use chrono::{Datelike, NaiveDate};

/// Anything that can hand back daily high/low observations for a date range.
///
/// Implementations own their retry behaviour: an `Err` means the range is
/// unavailable for this run.
#[allow(async_fn_in_trait)]
pub trait DailySource {
    async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<YearSeries, ArchiveError>;

    /// The whole of calendar year `year`.
    async fn fetch_year(&self, year: i32) -> Result<YearSeries, ArchiveError> {
        let range = DateRange::calendar_year(year).ok_or(ArchiveError::InvalidYear(year))?;
        self.fetch_range(range.start(), range.end()).await
    }

    /// January 1 of `today`'s year through `today`.
    async fn fetch_year_to_date(&self, today: NaiveDate) -> Result<YearSeries, ArchiveError> {
        let range =
            DateRange::year_to_date(today).ok_or(ArchiveError::InvalidYear(today.year()))?;
        self.fetch_range(range.start(), range.end()).await
    }
}
