//! Percentile bands and all-time extremes per day of year.

use crate::pool::{DayPool, PooledSamples};
use clim_archive::month_day::{CalendarAxis, MonthDayKey};
use clim_archive::observation::YearSeries;
use clim_utils::stats::{percentile, round_tenth};
use serde::{Serialize, Serializer};

/// Fewer samples than this and a day is left out of the envelope.
pub const MIN_ENVELOPE_SAMPLES: usize = 5;

/// Percentile and record values for one day of year, each rounded to one
/// decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeDay {
    pub key: MonthDayKey,
    pub p10_high: f64,
    pub p25_high: f64,
    pub p75_high: f64,
    pub p90_high: f64,
    pub p10_low: f64,
    pub p25_low: f64,
    pub p75_low: f64,
    pub p90_low: f64,
    pub record_high: f64,
    pub record_low: f64,
}

/// The four bands taken from a sorted sample.
struct Bands {
    p10: f64,
    p25: f64,
    p75: f64,
    p90: f64,
}

impl Bands {
    fn from_sorted(sorted: &[f64]) -> Option<Bands> {
        Some(Bands {
            p10: round_tenth(percentile(sorted, 0.10)?),
            p25: round_tenth(percentile(sorted, 0.25)?),
            p75: round_tenth(percentile(sorted, 0.75)?),
            p90: round_tenth(percentile(sorted, 0.90)?),
        })
    }
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut values = values.to_vec();
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

impl EnvelopeDay {
    /// `None` unless both highs and lows reach [`MIN_ENVELOPE_SAMPLES`].
    pub fn from_samples(key: MonthDayKey, samples: &PooledSamples) -> Option<EnvelopeDay> {
        if !samples.has_at_least(MIN_ENVELOPE_SAMPLES) {
            return None;
        }
        let highs = sorted(&samples.highs);
        let lows = sorted(&samples.lows);
        let high_bands = Bands::from_sorted(&highs)?;
        let low_bands = Bands::from_sorted(&lows)?;
        Some(EnvelopeDay {
            key,
            p10_high: high_bands.p10,
            p25_high: high_bands.p25,
            p75_high: high_bands.p75,
            p90_high: high_bands.p90,
            p10_low: low_bands.p10,
            p25_low: low_bands.p25,
            p75_low: low_bands.p75,
            p90_low: low_bands.p90,
            record_high: round_tenth(*highs.last()?),
            record_low: round_tenth(*lows.first()?),
        })
    }
}

/// Envelope days in calendar-axis order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope(pub Vec<EnvelopeDay>);

impl Envelope {
    pub fn from_pool(axis: &CalendarAxis, pool: &DayPool) -> Envelope {
        let days = axis
            .iter()
            .filter_map(|key| EnvelopeDay::from_samples(*key, pool.get(key)?))
            .collect();
        Envelope(days)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnvelopeDay> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &MonthDayKey) -> Option<&EnvelopeDay> {
        self.0.iter().find(|day| day.key == *key)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Columns<'a> {
            dates: Vec<&'a MonthDayKey>,
            p10_high: Vec<f64>,
            p25_high: Vec<f64>,
            p75_high: Vec<f64>,
            p90_high: Vec<f64>,
            p10_low: Vec<f64>,
            p25_low: Vec<f64>,
            p75_low: Vec<f64>,
            p90_low: Vec<f64>,
            record_high: Vec<f64>,
            record_low: Vec<f64>,
        }
        let column = |f: fn(&EnvelopeDay) -> f64| self.0.iter().map(f).collect::<Vec<f64>>();
        Columns {
            dates: self.0.iter().map(|day| &day.key).collect(),
            p10_high: column(|day| day.p10_high),
            p25_high: column(|day| day.p25_high),
            p75_high: column(|day| day.p75_high),
            p90_high: column(|day| day.p90_high),
            p10_low: column(|day| day.p10_low),
            p25_low: column(|day| day.p25_low),
            p75_low: column(|day| day.p75_low),
            p90_low: column(|day| day.p90_low),
            record_high: column(|day| day.record_high),
            record_low: column(|day| day.record_low),
        }
        .serialize(serializer)
    }
}

/// Envelope over every historical year.
pub fn envelope(axis: &CalendarAxis, history: &[YearSeries]) -> Envelope {
    Envelope::from_pool(axis, &DayPool::from_years(history))
}
