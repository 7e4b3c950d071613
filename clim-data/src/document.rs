//! The single document handed to the presentation layer.

use crate::anomalies::Anomalies;
use crate::envelope::Envelope;
use crate::monthly::MonthlyTable;
use crate::normals::DailyMeans;
use crate::summary::SummaryStat;
use crate::Climatology;
use chrono::NaiveDate;
use clim_archive::location::Location;
use clim_archive::observation::YearSeries;
use clim_utils::stats::round_tenth;
use serde::Serialize;
use std::collections::BTreeMap;

/// Location block as the page reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationInfo {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub elevation: String,
}

impl From<&Location> for LocationInfo {
    fn from(location: &Location) -> Self {
        LocationInfo {
            name: location.name.clone(),
            lat: location.latitude,
            lon: location.longitude,
            elevation: location.elevation.clone(),
        }
    }
}

/// A raw series as parallel columns, values rounded and nulls kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyColumns {
    pub dates: Vec<NaiveDate>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
}

impl From<&YearSeries> for DailyColumns {
    fn from(series: &YearSeries) -> Self {
        let mut columns = DailyColumns::default();
        for day in &series.days {
            columns.dates.push(day.date);
            columns.high.push(day.high.map(round_tenth));
            columns.low.push(day.low.map(round_tenth));
        }
        columns
    }
}

/// Field order here is the order keys appear in the written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputDocument {
    pub generated_at: String,
    pub year: i32,
    pub location: LocationInfo,
    pub current_year: DailyColumns,
    pub trailing_avg: DailyMeans,
    pub normals: DailyMeans,
    pub historical_envelope: Envelope,
    pub historical_years: BTreeMap<String, DailyColumns>,
    pub monthly: MonthlyTable,
    pub anomalies: Anomalies,
    pub summary: SummaryStat,
}

impl OutputDocument {
    /// Package the computed datasets with the raw series they came from.
    pub fn assemble(
        generated_at: String,
        location: &Location,
        history: &[YearSeries],
        current: &YearSeries,
        climatology: Climatology,
    ) -> OutputDocument {
        let historical_years = history
            .iter()
            .map(|series| (series.year.to_string(), DailyColumns::from(series)))
            .collect();
        OutputDocument {
            generated_at,
            year: current.year,
            location: LocationInfo::from(location),
            current_year: DailyColumns::from(current),
            trailing_avg: climatology.trailing_avg,
            normals: climatology.normals,
            historical_envelope: climatology.envelope,
            historical_years,
            monthly: climatology.monthly,
            anomalies: climatology.anomalies,
            summary: climatology.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DailyColumns, OutputDocument};
    use crate::test_support::series;
    use crate::{aggregate, AggregationParams};
    use clim_archive::location::Location;

    fn document() -> OutputDocument {
        let history = vec![
            series(2025, &[(1, 1, Some(40.04), Some(20.0))]),
            series(2024, &[(1, 1, Some(42.0), None)]),
        ];
        let current = series(2026, &[(1, 1, Some(45.0), Some(25.0))]);
        let params = AggregationParams {
            last_historical_year: 2025,
            trailing_window: 10,
        };
        let climatology = aggregate(&history, &current, &params);
        OutputDocument::assemble(
            String::from("2026-01-02T06:00:00"),
            &Location::denver(),
            &history,
            &current,
            climatology,
        )
    }

    #[test]
    fn test_raw_columns_round_and_keep_nulls() {
        let columns = DailyColumns::from(&series(2024, &[(5, 1, Some(70.06), None)]));
        assert_eq!(columns.high, vec![Some(70.1)]);
        assert_eq!(columns.low, vec![None]);
    }

    #[test]
    fn test_top_level_key_order() {
        let json = serde_json::to_string(&document()).unwrap();
        let keys = [
            "\"generated_at\"",
            "\"year\"",
            "\"location\"",
            "\"current_year\"",
            "\"trailing_avg\"",
            "\"normals\"",
            "\"historical_envelope\"",
            "\"historical_years\"",
            "\"monthly\"",
            "\"anomalies\"",
            "\"summary\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_document_shape() {
        let json = serde_json::to_value(document()).unwrap();
        assert_eq!(json["year"], 2026);
        assert_eq!(json["location"]["name"], "Denver, CO");
        assert_eq!(json["location"]["lat"], 39.7392);
        assert_eq!(json["location"]["elevation"], "5,280 ft");
        assert_eq!(json["current_year"]["dates"][0], "2026-01-01");
        assert_eq!(json["historical_years"]["2025"]["high"][0], 40.0);
        assert_eq!(
            json["historical_years"]["2024"]["low"][0],
            serde_json::Value::Null
        );
        let years: Vec<&String> = json["historical_years"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(years, vec!["2024", "2025"]);
        assert_eq!(json["normals"]["dates"][0], "01-01");
        assert_eq!(json["summary"]["today_date"], "2026-01-01");
        assert_eq!(json["monthly"]["January"]["departure_high"], 5.0);
        assert_eq!(json["anomalies"]["months"][0], "Jan");
    }
}
