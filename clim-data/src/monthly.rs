//! Calendar-month comparison of the current year against history, with
//! all-time monthly records.

use crate::pool::MonthPool;
use clim_archive::observation::YearSeries;
use clim_utils::dates::month_name;
use clim_utils::stats::{round_tenth, rounded_mean};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An extreme value and the year it was observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub value: f64,
    pub year: i32,
}

/// Running monthly extremes. Ties keep the first year seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthRecords {
    pub high: Option<Record>,
    pub low: Option<Record>,
}

impl MonthRecords {
    fn observe(&mut self, year: i32, high: f64, low: f64) {
        if self.high.map_or(true, |record| high > record.value) {
            self.high = Some(Record { value: high, year });
        }
        if self.low.map_or(true, |record| low < record.value) {
            self.low = Some(Record { value: low, year });
        }
    }
}

/// Records for each month, January at index 0, scanning years in the order
/// given.
pub fn monthly_records(history: &[YearSeries]) -> [MonthRecords; 12] {
    use chrono::Datelike;
    let mut records = [MonthRecords::default(); 12];
    for series in history {
        for (day, high, low) in series.valid_days() {
            records[day.date.month0() as usize].observe(series.year, high, low);
        }
    }
    records
}

/// One month's current-year averages next to its normals and records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyStat {
    #[serde(skip)]
    pub month: u32,
    pub avg_high: Option<f64>,
    pub avg_low: Option<f64>,
    pub normal_high: Option<f64>,
    pub normal_low: Option<f64>,
    pub record_high: Option<f64>,
    #[serde(serialize_with = "serialize_year")]
    pub record_high_year: Option<i32>,
    pub record_low: Option<f64>,
    #[serde(serialize_with = "serialize_year")]
    pub record_low_year: Option<i32>,
    pub departure_high: Option<f64>,
    pub departure_low: Option<f64>,
}

/// Years go out as strings; a month without a record gets "".
fn serialize_year<S: Serializer>(year: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error> {
    match year {
        Some(year) => serializer.collect_str(year),
        None => serializer.serialize_str(""),
    }
}

/// `current - normal`, rounded, when both exist.
fn departure(current: Option<f64>, normal: Option<f64>) -> Option<f64> {
    Some(round_tenth(current? - normal?))
}

/// All twelve months, January first. Serializes as a map keyed by month name.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTable(pub [MonthlyStat; 12]);

impl MonthlyTable {
    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyStat> {
        self.0.iter()
    }

    /// Stat for a 1-based month number.
    pub fn month(&self, month: u32) -> Option<&MonthlyStat> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.0.get(index)
    }
}

impl Serialize for MonthlyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for stat in &self.0 {
            let name = month_name(stat.month).unwrap_or_default();
            map.serialize_entry(name, stat)?;
        }
        map.end()
    }
}

/// Historical pass for normals and records, current-year pass for averages.
pub fn monthly_stats(history: &[YearSeries], current: &YearSeries) -> MonthlyTable {
    let historical = MonthPool::from_years(history);
    let records = monthly_records(history);
    let this_year = MonthPool::from_years(std::iter::once(current));

    let stats = std::array::from_fn(|index| {
        let month = index as u32 + 1;
        let (normal_high, normal_low) = historical
            .month(month)
            .map_or((None, None), |samples| {
                (rounded_mean(&samples.highs), rounded_mean(&samples.lows))
            });
        let (avg_high, avg_low) = this_year.month(month).map_or((None, None), |samples| {
            (rounded_mean(&samples.highs), rounded_mean(&samples.lows))
        });
        let record = records[index];
        MonthlyStat {
            month,
            avg_high,
            avg_low,
            normal_high,
            normal_low,
            record_high: record.high.map(|r| r.value),
            record_high_year: record.high.map(|r| r.year),
            record_low: record.low.map(|r| r.value),
            record_low_year: record.low.map(|r| r.year),
            departure_high: departure(avg_high, normal_high),
            departure_low: departure(avg_low, normal_low),
        }
    });
    MonthlyTable(stats)
}
