//! Per-day-of-year mean highs and lows: the long-window normals and the
//! short-window trailing average share one reduction.

use crate::pool::DayPool;
use clim_archive::month_day::{CalendarAxis, MonthDayKey};
use clim_archive::observation::YearSeries;
use clim_utils::stats::rounded_mean;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Mean high and low for one day of year, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayMean {
    pub key: MonthDayKey,
    pub high: f64,
    pub low: f64,
}

/// Day means in calendar-axis order. Days without samples are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyMeans(pub Vec<DayMean>);

impl DailyMeans {
    /// Walk the axis and average every day that has at least one sample.
    pub fn from_pool(axis: &CalendarAxis, pool: &DayPool) -> DailyMeans {
        let days = axis
            .iter()
            .filter_map(|key| {
                let samples = pool.get(key)?;
                let high = rounded_mean(&samples.highs)?;
                let low = rounded_mean(&samples.lows)?;
                Some(DayMean {
                    key: *key,
                    high,
                    low,
                })
            })
            .collect();
        DailyMeans(days)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayMean> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &MonthDayKey) -> Option<&DayMean> {
        self.0.iter().find(|day| day.key == *key)
    }

    /// Key → mean high lookup.
    pub fn high_by_key(&self) -> HashMap<MonthDayKey, f64> {
        self.0.iter().map(|day| (day.key, day.high)).collect()
    }
}

impl Serialize for DailyMeans {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Columns<'a> {
            dates: Vec<&'a MonthDayKey>,
            high: Vec<f64>,
            low: Vec<f64>,
        }
        Columns {
            dates: self.0.iter().map(|day| &day.key).collect(),
            high: self.0.iter().map(|day| day.high).collect(),
            low: self.0.iter().map(|day| day.low).collect(),
        }
        .serialize(serializer)
    }
}

/// Long-window normals over every historical year.
pub fn normals(axis: &CalendarAxis, history: &[YearSeries]) -> DailyMeans {
    DailyMeans::from_pool(axis, &DayPool::from_years(history))
}

/// Historical years inside the `window` years ending at `last_year`.
pub fn trailing_years(history: &[YearSeries], last_year: i32, window: u32) -> Vec<&YearSeries> {
    let first_year = last_year - window as i32 + 1;
    history
        .iter()
        .filter(|series| (first_year..=last_year).contains(&series.year))
        .collect()
}

/// The same reduction restricted to the most recent `window` years.
pub fn trailing_average(
    axis: &CalendarAxis,
    history: &[YearSeries],
    last_year: i32,
    window: u32,
) -> DailyMeans {
    let years = trailing_years(history, last_year, window);
    DailyMeans::from_pool(axis, &DayPool::from_years(years))
}
