use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A geographic position in GeoJSON coordinate order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Longitude in degrees
    pub lon: f64,

    /// Latitude in degrees
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// A single timestamped position observation for a tracked object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ping {
    /// ICAO-style identifier of the tracked object
    pub object_id: String,

    /// Observation time in epoch seconds (monotonic per object, not globally)
    pub timestamp: f64,

    /// Observed position
    pub position: Position,

    /// Reported altitude in feet
    pub altitude_ft: f64,

    /// Sighting this ping was recorded under, if any
    pub sighting_id: Option<i64>,
}

impl Ping {
    /// Create a new ping
    pub fn new(object_id: &str, timestamp: f64, position: Position, altitude_ft: f64) -> Self {
        Self {
            object_id: object_id.to_string(),
            timestamp,
            position,
            altitude_ft,
            sighting_id: None,
        }
    }

    /// Interpret the timestamp as a UTC datetime
    ///
    /// Returns None when the timestamp is outside the representable range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        let millis = (self.timestamp * 1000.0) as i64;
        DateTime::from_timestamp_millis(millis)
    }

    /// Human-readable time string for display next to the ping
    pub fn time_display(&self) -> String {
        match self.datetime() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => format!("{:.0}s", self.timestamp),
        }
    }
}
