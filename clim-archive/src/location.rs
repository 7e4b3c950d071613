use serde::{Deserialize, Serialize};

/// The fixed point whose daily temperatures are archived.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Display name, e.g. "Denver, CO"
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Human-readable elevation label, e.g. "5,280 ft"
    pub elevation: String,
    /// IANA timezone the archive uses to cut days
    pub timezone: String,
}

impl Location {
    pub fn denver() -> Location {
        Location {
            name: String::from("Denver, CO"),
            latitude: 39.7392,
            longitude: -104.9903,
            elevation: String::from("5,280 ft"),
            timezone: String::from("America/Denver"),
        }
    }
}
