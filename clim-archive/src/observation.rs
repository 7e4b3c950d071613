use crate::error::ArchiveError;
use crate::month_day::MonthDayKey;
use chrono::{Datelike, NaiveDate};
use clim_utils::dates::parse_date;
use serde::{Deserialize, Serialize};

/// One day from the archive: a date plus the daily maximum and minimum
/// temperature, either of which may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub high: Option<f64>,
    pub low: Option<f64>,
}

impl DailyObservation {
    pub fn new(date: NaiveDate, high: Option<f64>, low: Option<f64>) -> Self {
        DailyObservation { date, high, low }
    }

    /// A day counts toward temperature aggregates only when both values exist.
    pub fn is_valid(&self) -> bool {
        self.high.is_some() && self.low.is_some()
    }

    /// `(high, low)` for a valid day.
    pub fn valid_pair(&self) -> Option<(f64, f64)> {
        match (self.high, self.low) {
            (Some(high), Some(low)) => Some((high, low)),
            _ => None,
        }
    }

    pub fn month_day(&self) -> MonthDayKey {
        MonthDayKey::from(self.date)
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// The observations for one calendar year (or the part of it fetched so far),
/// in date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSeries {
    pub year: i32,
    pub days: Vec<DailyObservation>,
}

impl YearSeries {
    pub fn new(year: i32, days: Vec<DailyObservation>) -> Self {
        YearSeries { year, days }
    }

    /// Build a series from the archive's parallel columns.
    pub fn from_columns(
        year: i32,
        dates: &[String],
        highs: &[Option<f64>],
        lows: &[Option<f64>],
    ) -> Result<Self, ArchiveError> {
        if highs.len() != dates.len() || lows.len() != dates.len() {
            return Err(ArchiveError::MismatchedColumns {
                dates: dates.len(),
                highs: highs.len(),
                lows: lows.len(),
            });
        }
        let days = dates
            .iter()
            .zip(highs.iter().zip(lows.iter()))
            .map(|(date, (high, low))| {
                parse_date(date)
                    .map(|date| DailyObservation::new(date, *high, *low))
                    .map_err(|e| ArchiveError::DateParse(date.clone(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(YearSeries { year, days })
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Valid days only, as `(observation, high, low)`.
    pub fn valid_days(&self) -> impl Iterator<Item = (&DailyObservation, f64, f64)> + '_ {
        self.days
            .iter()
            .filter_map(|day| day.valid_pair().map(|(high, low)| (day, high, low)))
    }

    /// The most recent day that has both a high and a low.
    pub fn latest_valid(&self) -> Option<&DailyObservation> {
        self.days.iter().rev().find(|day| day.is_valid())
    }
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<ArchiveDaily>,
}

#[derive(Debug, Default, Deserialize)]
struct ArchiveDaily {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
}

/// Parse an archive JSON body into the series for `year`.
///
/// A body without a `daily` block yields an empty series; `null` values are
/// kept as missing.
pub fn parse_archive_response(year: i32, body: &str) -> Result<YearSeries, ArchiveError> {
    let response: ArchiveResponse = serde_json::from_str(body)?;
    let daily = response.daily.unwrap_or_default();
    YearSeries::from_columns(
        year,
        &daily.time,
        &daily.temperature_2m_max,
        &daily.temperature_2m_min,
    )
}
