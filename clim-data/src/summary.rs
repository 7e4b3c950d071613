//! Year-to-date highlights for the current year.

use crate::normals::DailyMeans;
use chrono::NaiveDate;
use clim_archive::observation::YearSeries;
use clim_utils::stats::rounded_mean;
use serde::Serialize;

/// Lows at or below this count as a freezing day (°F).
pub const FREEZING_F: f64 = 32.0;

/// Highs at or above this count as a hot day (°F).
pub const HOT_DAY_F: f64 = 90.0;

/// The date and temperature of an extreme day, both null when no day
/// qualified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayExtreme {
    pub date: Option<NaiveDate>,
    pub temp: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStat {
    pub today_high: Option<f64>,
    pub today_low: Option<f64>,
    pub today_date: Option<NaiveDate>,
    pub ytd_avg_high: Option<f64>,
    pub ytd_normal_avg_high: Option<f64>,
    pub hottest_day: DayExtreme,
    pub coldest_day: DayExtreme,
    pub days_below_freezing: usize,
    pub days_above_90: usize,
}

/// Keep the first value that beats the running extreme.
fn track(extreme: &mut DayExtreme, date: NaiveDate, value: f64, beats: fn(f64, f64) -> bool) {
    if extreme.temp.map_or(true, |current| beats(value, current)) {
        *extreme = DayExtreme {
            date: Some(date),
            temp: Some(value),
        };
    }
}

pub fn summarize(current: &YearSeries, normals: &DailyMeans) -> SummaryStat {
    let mut summary = SummaryStat::default();

    if let Some(latest) = current.latest_valid() {
        summary.today_high = latest.high;
        summary.today_low = latest.low;
        summary.today_date = Some(latest.date);
    }

    let valid_highs: Vec<f64> = current.valid_days().map(|(_, high, _)| high).collect();
    summary.ytd_avg_high = rounded_mean(&valid_highs);

    let normal_highs = normals.high_by_key();
    let elapsed_normals: Vec<f64> = current
        .days
        .iter()
        .filter_map(|day| normal_highs.get(&day.month_day()).copied())
        .collect();
    summary.ytd_normal_avg_high = rounded_mean(&elapsed_normals);

    for day in &current.days {
        if let Some(high) = day.high {
            track(&mut summary.hottest_day, day.date, high, |a, b| a > b);
            if high >= HOT_DAY_F {
                summary.days_above_90 += 1;
            }
        }
        if let Some(low) = day.low {
            track(&mut summary.coldest_day, day.date, low, |a, b| a < b);
            if low <= FREEZING_F {
                summary.days_below_freezing += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::normals::{normals, DailyMeans};
    use crate::test_support::series;
    use chrono::NaiveDate;
    use clim_archive::month_day::CalendarAxis;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_days_below_freezing_counts_inclusive() {
        let current = series(
            2026,
            &[
                (1, 1, Some(40.0), Some(20.0)),
                (1, 2, Some(41.0), Some(32.0)),
                (1, 3, Some(42.0), Some(33.0)),
                (1, 4, Some(43.0), None),
                (1, 5, Some(44.0), Some(31.0)),
            ],
        );
        let summary = summarize(&current, &DailyMeans::default());
        assert_eq!(summary.days_below_freezing, 3);
    }

    #[test]
    fn test_hot_days_inclusive() {
        let current = series(
            2026,
            &[
                (7, 1, Some(89.9), Some(60.0)),
                (7, 2, Some(90.0), Some(60.0)),
                (7, 3, Some(97.0), None),
            ],
        );
        let summary = summarize(&current, &DailyMeans::default());
        assert_eq!(summary.days_above_90, 2);
    }

    #[test]
    fn test_today_is_latest_valid_day() {
        let current = series(
            2026,
            &[
                (3, 1, Some(50.0), Some(30.0)),
                (3, 2, Some(55.0), Some(31.0)),
                (3, 3, None, Some(29.0)),
            ],
        );
        let summary = summarize(&current, &DailyMeans::default());
        assert_eq!(summary.today_date, Some(date(3, 2)));
        assert_eq!(summary.today_high, Some(55.0));
        assert_eq!(summary.today_low, Some(31.0));
    }

    #[test]
    fn test_empty_year_is_all_null() {
        let current = series(2026, &[(1, 1, None, None)]);
        let summary = summarize(&current, &DailyMeans::default());
        assert_eq!(summary.today_date, None);
        assert_eq!(summary.today_high, None);
        assert_eq!(summary.ytd_avg_high, None);
        assert_eq!(summary.ytd_normal_avg_high, None);
        assert_eq!(summary.hottest_day.date, None);
        assert_eq!(summary.coldest_day.temp, None);
        assert_eq!(summary.days_below_freezing, 0);
        assert_eq!(summary.days_above_90, 0);
    }

    #[test]
    fn test_extremes_keep_first_occurrence() {
        let current = series(
            2026,
            &[
                (6, 1, Some(95.0), Some(50.0)),
                (6, 2, Some(95.0), Some(50.0)),
                (6, 3, Some(80.0), Some(55.0)),
            ],
        );
        let summary = summarize(&current, &DailyMeans::default());
        assert_eq!(summary.hottest_day.date, Some(date(6, 1)));
        assert_eq!(summary.hottest_day.temp, Some(95.0));
        assert_eq!(summary.coldest_day.date, Some(date(6, 1)));
        assert_eq!(summary.coldest_day.temp, Some(50.0));
    }

    #[test]
    fn test_ytd_averages() {
        let history = vec![series(
            2025,
            &[(1, 1, Some(40.0), Some(20.0)), (1, 2, Some(44.0), Some(20.0))],
        )];
        let normals = normals(&CalendarAxis::build(), &history);
        let current = series(
            2026,
            &[
                (1, 1, Some(50.0), Some(30.0)),
                (1, 2, Some(53.0), None),
                // no normal for Jan 3: skipped, not treated as zero
                (1, 3, Some(56.0), Some(31.0)),
            ],
        );
        let summary = summarize(&current, &normals);
        // valid days only: (50 + 56) / 2
        assert_eq!(summary.ytd_avg_high, Some(53.0));
        // normals for Jan 1 and Jan 2: (40 + 44) / 2
        assert_eq!(summary.ytd_normal_avg_high, Some(42.0));
    }
}
