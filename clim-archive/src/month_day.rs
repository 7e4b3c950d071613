//! Day-of-year keys that line several calendar years up on one axis.

use crate::date_range::DateRange;
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Non-leap year whose dates seed the calendar axis.
pub const REFERENCE_YEAR: i32 = 2025;

/// Leap year used to validate month/day pairs, so February 29 is accepted.
const VALIDATION_YEAR: i32 = 2000;

/// A calendar position with the year stripped, rendered as "MM-DD".
///
/// Ordering is by month then day, which matches the calendar axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDayKey {
    month: u32,
    day: u32,
}

impl MonthDayKey {
    /// February 29.
    pub const LEAP_DAY: MonthDayKey = MonthDayKey { month: 2, day: 29 };

    /// February 28, the leap day's predecessor on the axis.
    pub const FEBRUARY_28: MonthDayKey = MonthDayKey { month: 2, day: 28 };

    pub fn new(month: u32, day: u32) -> Option<MonthDayKey> {
        NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day).map(|_| MonthDayKey { month, day })
    }
}

impl From<NaiveDate> for MonthDayKey {
    fn from(value: NaiveDate) -> Self {
        MonthDayKey {
            month: value.month(),
            day: value.day(),
        }
    }
}

impl From<&NaiveDate> for MonthDayKey {
    fn from(value: &NaiveDate) -> Self {
        MonthDayKey::from(*value)
    }
}

impl fmt::Display for MonthDayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Error for strings that are not a valid "MM-DD" key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthDayError(pub String);

impl fmt::Display for ParseMonthDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month-day key: {:?}", self.0)
    }
}

impl std::error::Error for ParseMonthDayError {}

impl FromStr for MonthDayKey {
    type Err = ParseMonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthDayError(s.to_string());
        if s.len() != 5 {
            return Err(err());
        }
        let (month, day) = s.split_once('-').ok_or_else(err)?;
        let month = month.parse::<u32>().map_err(|_| err())?;
        let day = day.parse::<u32>().map_err(|_| err())?;
        MonthDayKey::new(month, day).ok_or_else(err)
    }
}

impl Serialize for MonthDayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The 366 month-day keys in calendar order, February 29 included.
///
/// Every per-day-of-year series is emitted in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarAxis(Vec<MonthDayKey>);

impl CalendarAxis {
    /// Enumerate the reference non-leap year, then slot February 29 in right
    /// after February 28.
    pub fn build() -> CalendarAxis {
        let mut keys: Vec<MonthDayKey> = DateRange::calendar_year(REFERENCE_YEAR)
            .into_iter()
            .flatten()
            .map(MonthDayKey::from)
            .collect();
        if !keys.contains(&MonthDayKey::LEAP_DAY) {
            let position = keys
                .iter()
                .position(|key| *key == MonthDayKey::FEBRUARY_28)
                .map_or(keys.len(), |index| index + 1);
            keys.insert(position, MonthDayKey::LEAP_DAY);
        }
        CalendarAxis(keys)
    }

    pub fn keys(&self) -> &[MonthDayKey] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthDayKey> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &MonthDayKey) -> bool {
        self.0.contains(key)
    }
}

impl Default for CalendarAxis {
    fn default() -> Self {
        CalendarAxis::build()
    }
}

impl<'a> IntoIterator for &'a CalendarAxis {
    type Item = &'a MonthDayKey;
    type IntoIter = std::slice::Iter<'a, MonthDayKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
