//! Sequential retrieval of the historical window and the current year.

use crate::config::Config;
use clim_archive::observation::YearSeries;
use clim_archive::source::DailySource;
use log::{info, warn};

/// What a run pulled from the archive.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedData {
    /// Years that came back, ascending. Failed years are absent.
    pub history: Vec<YearSeries>,
    pub current: YearSeries,
}

/// Fetch each historical year in order, pausing after every success.
///
/// A year whose retries run out is logged and left out; the rest of the
/// window still loads.
pub async fn fetch_history<S: DailySource>(source: &S, config: &Config) -> Vec<YearSeries> {
    let years = config.historical_years();
    info!(
        "Fetching {} historical years ({}-{})",
        years.clone().count(),
        config.historical_start_year,
        config.historical_end_year
    );
    let mut history = Vec::new();
    for year in years {
        match source.fetch_year(year).await {
            Ok(series) => {
                info!("{}: {} days", year, series.len());
                history.push(series);
                tokio::time::sleep(config.pacing_delay).await;
            }
            Err(e) => warn!("{}: no data, skipping ({})", year, e),
        }
    }
    history
}

/// History first, then January 1 through today. Losing the current year
/// fails the run.
pub async fn fetch_all<S: DailySource>(source: &S, config: &Config) -> anyhow::Result<FetchedData> {
    let history = fetch_history(source, config).await;

    info!(
        "Fetching current year ({}-01-01 to {})",
        config.current_year(),
        config.today
    );
    let current = match source.fetch_year_to_date(config.today).await {
        Ok(series) => series,
        Err(e) => anyhow::bail!(
            "could not fetch current year {}: {}",
            config.current_year(),
            e
        ),
    };
    info!("Current year: {} days", current.len());

    Ok(FetchedData { history, current })
}

#[cfg(test)]
mod tests {
    use super::{fetch_all, fetch_history};
    use crate::config::Config;
    use chrono::{Datelike, NaiveDate};
    use clim_archive::error::ArchiveError;
    use clim_archive::observation::{DailyObservation, YearSeries};
    use clim_archive::source::DailySource;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::time::Duration;

    /// Serves one observation per requested range, failing for chosen years.
    struct FakeSource {
        failing: HashSet<i32>,
        requests: RefCell<Vec<(NaiveDate, NaiveDate)>>,
    }

    impl FakeSource {
        fn failing(years: &[i32]) -> Self {
            FakeSource {
                failing: years.iter().copied().collect(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl DailySource for FakeSource {
        async fn fetch_range(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<YearSeries, ArchiveError> {
            self.requests.borrow_mut().push((start, end));
            if self.failing.contains(&start.year()) {
                return Err(ArchiveError::RetriesExhausted {
                    start,
                    end,
                    attempts: 3,
                });
            }
            let day = DailyObservation::new(end, Some(50.0), Some(20.0));
            Ok(YearSeries::new(start.year(), vec![day]))
        }
    }

    fn config() -> Config {
        let mut config = Config::denver(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        config.pacing_delay = Duration::ZERO;
        config
    }

    #[tokio::test]
    async fn test_failed_years_are_skipped() {
        let source = FakeSource::failing(&[1999, 2010]);
        let history = fetch_history(&source, &config()).await;
        assert_eq!(history.len(), 28);
        assert!(history.iter().all(|s| s.year != 1999 && s.year != 2010));
        assert!(history.windows(2).all(|pair| pair[0].year < pair[1].year));
        assert_eq!(source.requests.borrow().len(), 30);
    }

    #[tokio::test]
    async fn test_requests_cover_full_years_then_year_to_date() {
        let source = FakeSource::failing(&[]);
        let fetched = fetch_all(&source, &config()).await.unwrap();
        let requests = source.requests.borrow();
        assert_eq!(requests.len(), 31);
        assert_eq!(
            requests[0],
            (
                NaiveDate::from_ymd_opt(1996, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(1996, 12, 31).unwrap()
            )
        );
        assert_eq!(
            requests[30],
            (
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
            )
        );
        assert_eq!(fetched.current.year, 2026);
        assert_eq!(fetched.history.len(), 30);
    }

    #[tokio::test]
    async fn test_current_year_failure_aborts() {
        let source = FakeSource::failing(&[2026]);
        let result = fetch_all(&source, &config()).await;
        assert!(result.is_err());
    }
}
