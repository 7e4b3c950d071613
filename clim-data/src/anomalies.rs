use crate::monthly::MonthlyTable;
use clim_utils::dates::month_abbreviation;
use serde::Serialize;

/// Monthly departures for the months that have one, as parallel columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Anomalies {
    pub months: Vec<&'static str>,
    pub high_departure: Vec<f64>,
    pub low_departure: Vec<Option<f64>>,
}

impl From<&MonthlyTable> for Anomalies {
    fn from(table: &MonthlyTable) -> Self {
        let mut anomalies = Anomalies::default();
        for stat in table.iter() {
            let (Some(high), Some(name)) = (stat.departure_high, month_abbreviation(stat.month))
            else {
                continue;
            };
            anomalies.months.push(name);
            anomalies.high_departure.push(high);
            anomalies.low_departure.push(stat.departure_low);
        }
        anomalies
    }
}
