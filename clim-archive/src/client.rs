//! Open-Meteo archive client.

use crate::error::ArchiveError;
use crate::location::Location;
use crate::observation::{parse_archive_response, YearSeries};
use crate::retry::RetryPolicy;
use crate::source::DailySource;
use chrono::{Datelike, NaiveDate};
use clim_utils::dates::format_date;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

/// Historical weather archive endpoint.
pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Daily fields requested from the archive.
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min";

/// Unit system for every temperature the archive returns.
pub const TEMPERATURE_UNIT: &str = "fahrenheit";

/// Longest slice of an error body kept in an error message.
const ERROR_BODY_LIMIT: usize = 200;

/// Fetches daily highs and lows for one location, retrying transient failures.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
    location: Location,
    retry: RetryPolicy,
}

impl ArchiveClient {
    pub fn new(location: Location, timeout: Duration) -> Result<Self, ArchiveError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(ArchiveClient {
            client,
            base_url: ARCHIVE_URL.to_string(),
            location,
            retry: RetryPolicy::default(),
        })
    }

    /// Point the client at another archive-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Query string for a day range at this client's location.
    pub fn query_params(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.location.latitude.to_string()),
            ("longitude", self.location.longitude.to_string()),
            ("start_date", format_date(start)),
            ("end_date", format_date(end)),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", self.location.timezone.clone()),
            ("temperature_unit", TEMPERATURE_UNIT.to_string()),
        ]
    }

    /// A single request, no retries.
    async fn request(&self, start: &NaiveDate, end: &NaiveDate) -> Result<YearSeries, ArchiveError> {
        let params = self.query_params(start, end);
        debug!("GET {} {:?}", self.base_url, params);
        let response = self.client.get(&self.base_url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ArchiveError::HttpStatus {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }
        let body = response.text().await?;
        parse_archive_response(start.year(), &body)
    }
}

impl DailySource for ArchiveClient {
    async fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<YearSeries, ArchiveError> {
        let max_tries = self.retry.max_tries;
        for attempt in 1..=max_tries {
            match self.request(&start, &end).await {
                Ok(series) => return Ok(series),
                Err(e) => {
                    warn!(
                        "Attempt {}/{}: request for {} to {} failed: {}",
                        attempt, max_tries, start, end, e
                    );
                    if let Some(wait) = self.retry.delay_after(attempt, &e) {
                        info!(
                            "Sleeping for {} milliseconds before retry for {}",
                            wait.as_millis(),
                            start.year()
                        );
                        tokio::time::sleep(wait).await;
                    }
                }
            }
        }

        warn!("All attempts failed for {} to {}", start, end);
        Err(ArchiveError::RetriesExhausted {
            start,
            end,
            attempts: max_tries,
        })
    }
}
