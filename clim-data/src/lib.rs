//! Climatology aggregation over daily temperature series.
//!
//! Every dataset here is a pure function of the fetched years: pooling by
//! day of year or by month, then reducing to means, percentiles and records.

pub mod anomalies;
pub mod document;
pub mod envelope;
pub mod monthly;
pub mod normals;
pub mod pool;
pub mod summary;

use anomalies::Anomalies;
use clim_archive::month_day::CalendarAxis;
use clim_archive::observation::YearSeries;
use envelope::Envelope;
use log::info;
use monthly::MonthlyTable;
use normals::DailyMeans;
use summary::SummaryStat;

/// Which historical years feed the trailing average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationParams {
    pub last_historical_year: i32,
    pub trailing_window: u32,
}

/// The derived datasets computed from one run's history and current year.
#[derive(Debug, Clone, PartialEq)]
pub struct Climatology {
    pub normals: DailyMeans,
    pub trailing_avg: DailyMeans,
    pub envelope: Envelope,
    pub monthly: MonthlyTable,
    pub anomalies: Anomalies,
    pub summary: SummaryStat,
}

/// Compute every derived dataset. `history` should be in ascending year
/// order; monthly records keep the first year that reached a value.
pub fn aggregate(
    history: &[YearSeries],
    current: &YearSeries,
    params: &AggregationParams,
) -> Climatology {
    let axis = CalendarAxis::build();

    let trailing_avg = normals::trailing_average(
        &axis,
        history,
        params.last_historical_year,
        params.trailing_window,
    );
    info!("trailing average: {} days", trailing_avg.len());

    let normals = normals::normals(&axis, history);
    info!("normals: {} days", normals.len());

    let envelope = envelope::envelope(&axis, history);
    info!("envelope: {} days", envelope.len());

    let monthly = monthly::monthly_stats(history, current);
    let anomalies = Anomalies::from(&monthly);
    info!("monthly stats: {} months with departures", anomalies.months.len());

    let summary = summary::summarize(current, &normals);

    Climatology {
        normals,
        trailing_avg,
        envelope,
        monthly,
        anomalies,
        summary,
    }
}
