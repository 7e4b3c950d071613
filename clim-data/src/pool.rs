//! Pooling of valid daily samples across years.
//!
//! A pool is keyed explicitly; nothing downstream relies on its iteration
//! order. Per-day-of-year outputs walk the calendar axis instead.

use chrono::Datelike;
use clim_archive::month_day::MonthDayKey;
use clim_archive::observation::YearSeries;
use std::collections::HashMap;

/// Highs and lows gathered from valid days only. Both multisets always have
/// the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PooledSamples {
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
}

impl PooledSamples {
    pub fn push(&mut self, high: f64, low: f64) {
        self.highs.push(high);
        self.lows.push(low);
    }

    /// Number of samples in the smaller of the two multisets.
    pub fn len(&self) -> usize {
        self.highs.len().min(self.lows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.highs.is_empty() || self.lows.is_empty()
    }

    /// True when both multisets hold at least `minimum` samples.
    pub fn has_at_least(&self, minimum: usize) -> bool {
        self.len() >= minimum
    }
}

/// Samples for every day of year seen in a set of years.
#[derive(Debug, Clone, Default)]
pub struct DayPool(HashMap<MonthDayKey, PooledSamples>);

impl DayPool {
    pub fn from_years<'a, I>(years: I) -> DayPool
    where
        I: IntoIterator<Item = &'a YearSeries>,
    {
        let mut pool: HashMap<MonthDayKey, PooledSamples> = HashMap::new();
        for series in years {
            for (day, high, low) in series.valid_days() {
                pool.entry(day.month_day()).or_default().push(high, low);
            }
        }
        DayPool(pool)
    }

    pub fn get(&self, key: &MonthDayKey) -> Option<&PooledSamples> {
        self.0.get(key)
    }
}

/// Samples for each calendar month, January at index 0.
#[derive(Debug, Clone, Default)]
pub struct MonthPool([PooledSamples; 12]);

impl MonthPool {
    pub fn from_years<'a, I>(years: I) -> MonthPool
    where
        I: IntoIterator<Item = &'a YearSeries>,
    {
        let mut pool = MonthPool::default();
        for series in years {
            for (day, high, low) in series.valid_days() {
                pool.0[day.date.month0() as usize].push(high, low);
            }
        }
        pool
    }

    /// Samples for a 1-based month number.
    pub fn month(&self, month: u32) -> Option<&PooledSamples> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.0.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{DayPool, MonthPool, PooledSamples};
    use crate::test_support::{series, year_of};
    use clim_archive::month_day::MonthDayKey;

    #[test]
    fn test_pool_skips_invalid_days() {
        let years = vec![
            series(2020, &[(7, 4, Some(90.0), Some(60.0))]),
            series(2021, &[(7, 4, Some(92.0), None)]),
            series(2022, &[(7, 4, Some(94.0), Some(64.0))]),
        ];
        let pool = DayPool::from_years(&years);
        let samples = pool.get(&MonthDayKey::new(7, 4).unwrap()).unwrap();
        assert_eq!(samples.highs, vec![90.0, 94.0]);
        assert_eq!(samples.lows, vec![60.0, 64.0]);
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_pool_lines_up_years_by_month_day() {
        let years = vec![
            year_of(2019, |_| Some(50.0), |_| Some(30.0)),
            year_of(2020, |d| Some(d as f64), |_| Some(10.0)),
        ];
        let pool = DayPool::from_years(&years);
        let get = |key: &str| pool.get(&key.parse::<MonthDayKey>().unwrap()).unwrap();
        assert_eq!(get("01-01").highs, vec![50.0, 1.0]);
        // only the leap year has a February 29, its 60th day
        assert_eq!(get("02-29").highs, vec![60.0]);
        // the 186th day of 2020, one later than in 2019
        assert_eq!(get("07-04").highs, vec![50.0, 186.0]);
        assert_eq!(get("12-31").lows, vec![30.0, 10.0]);
    }

    #[test]
    fn test_all_missing_year_contributes_nothing() {
        let years = vec![year_of(2020, |_| None, |_| None)];
        let pool = DayPool::from_years(&years);
        assert!(pool.get(&MonthDayKey::new(1, 1).unwrap()).is_none());
        let months = MonthPool::from_years(&years);
        assert!(months.month(1).unwrap().is_empty());
    }

    #[test]
    fn test_month_pool() {
        let years = vec![series(
            2020,
            &[
                (1, 1, Some(40.0), Some(20.0)),
                (1, 31, Some(42.0), Some(22.0)),
                (2, 1, Some(50.0), Some(25.0)),
            ],
        )];
        let pool = MonthPool::from_years(&years);
        assert_eq!(pool.month(1).unwrap().highs, vec![40.0, 42.0]);
        assert_eq!(pool.month(2).unwrap().lows, vec![25.0]);
        assert!(pool.month(3).unwrap().is_empty());
        assert!(pool.month(0).is_none());
        assert!(pool.month(13).is_none());
    }

    #[test]
    fn test_threshold() {
        let mut samples = PooledSamples::default();
        for i in 0..5 {
            samples.push(i as f64, i as f64);
        }
        assert!(samples.has_at_least(5));
        assert!(!samples.has_at_least(6));
        // a lone extra high does not lift the count
        samples.highs.push(9.0);
        assert_eq!(samples.len(), 5);
        assert!(!samples.has_at_least(6));
    }
}
