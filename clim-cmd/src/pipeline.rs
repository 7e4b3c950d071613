//! Fetch, aggregate, assemble, write.

use crate::config::Config;
use crate::fetch::fetch_all;
use crate::output::{generated_at_now, write_document};
use clim_archive::client::ArchiveClient;
use clim_archive::source::DailySource;
use clim_data::document::OutputDocument;
use clim_data::summary::SummaryStat;
use log::info;

/// Everything up to serialization, against any source.
pub async fn build_document<S: DailySource>(
    source: &S,
    config: &Config,
    generated_at: String,
) -> anyhow::Result<OutputDocument> {
    let fetched = fetch_all(source, config).await?;
    let climatology = clim_data::aggregate(
        &fetched.history,
        &fetched.current,
        &config.aggregation_params(),
    );
    Ok(OutputDocument::assemble(
        generated_at,
        &config.location,
        &fetched.history,
        &fetched.current,
        climatology,
    ))
}

/// One full run against the live archive.
pub async fn run_fetch(config: &Config) -> anyhow::Result<()> {
    info!(
        "Building climatology for {} ({}, today {})",
        config.location.name,
        config.current_year(),
        config.today
    );
    let client = ArchiveClient::new(config.location.clone(), config.request_timeout)?;
    let document = build_document(&client, config, generated_at_now()).await?;

    let written = write_document(&config.output, &document)?;
    info!("Wrote {} ({} KB)", config.output.display(), written / 1024);
    log_summary(config, &document);
    Ok(())
}

fn log_summary(config: &Config, document: &OutputDocument) {
    info!(
        "Historical years: {} of {}-{}",
        document.historical_years.len(),
        config.historical_start_year,
        config.historical_end_year
    );
    info!("Current year days: {}", document.current_year.dates.len());
    let SummaryStat {
        today_high,
        today_low,
        today_date,
        ytd_avg_high,
        ytd_normal_avg_high,
        days_below_freezing,
        days_above_90,
        ..
    } = document.summary;
    if let (Some(date), Some(high), Some(low)) = (today_date, today_high, today_low) {
        info!("Latest: {} high {}°F, low {}°F", date, high, low);
    }
    if let Some(avg) = ytd_avg_high {
        match ytd_normal_avg_high {
            Some(normal) => info!("YTD avg high: {}°F (normal: {}°F)", avg, normal),
            None => info!("YTD avg high: {}°F", avg),
        }
    }
    info!("Days below freezing: {}", days_below_freezing);
    info!("Days above 90°F: {}", days_above_90);
}
