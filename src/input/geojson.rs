use crate::core::{Ping, Position};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors from reading a batch ping file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GeoJSON")]
    Parse(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, got {0:?}")]
    NotFeatureCollection(String),
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Properties,
    geometry: Option<Geometry>,
}

#[derive(Deserialize, Default)]
struct Properties {
    icao: Option<String>,
    time: Option<f64>,
    alt_ft: Option<f64>,
    sighting_id: Option<i64>,
}

#[derive(Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Vec<f64>,
}

/// Parse a batch ping FeatureCollection into pings
///
/// Features without an icao, a time, or point coordinates carry no playable
/// record; they are skipped with a warning rather than failing the load.
pub fn parse_geojson(data: &str) -> Result<Vec<Ping>, InputError> {
    let collection: FeatureCollection = serde_json::from_str(data)?;
    if collection.kind != "FeatureCollection" {
        return Err(InputError::NotFeatureCollection(collection.kind));
    }

    let mut pings = Vec::with_capacity(collection.features.len());
    for (idx, feature) in collection.features.into_iter().enumerate() {
        match ping_from_feature(feature) {
            Some(ping) => pings.push(ping),
            None => warn!(feature = idx, "skipping malformed ping feature"),
        }
    }

    Ok(pings)
}

fn ping_from_feature(feature: Feature) -> Option<Ping> {
    let geometry = feature.geometry?;
    if geometry.kind != "Point" || geometry.coordinates.len() < 2 {
        return None;
    }

    let icao = feature.properties.icao.filter(|s| !s.is_empty())?;
    let time = feature.properties.time?;

    let mut ping = Ping::new(
        &icao,
        time,
        Position::new(geometry.coordinates[0], geometry.coordinates[1]),
        feature.properties.alt_ft.unwrap_or(0.0),
    );
    ping.sighting_id = feature.properties.sighting_id;
    Some(ping)
}

/// Load pings from a GeoJSON file on disk
pub fn load_geojson(path: &str) -> Result<Vec<Ping>, InputError> {
    let data = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_geojson(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(icao: &str, time: f64, lon: f64, lat: f64) -> String {
        format!(
            r#"{{"type":"Feature","properties":{{"icao":"{icao}","time":{time},"alt_ft":32000,"sighting_id":7}},"geometry":{{"type":"Point","coordinates":[{lon},{lat}]}}}}"#
        )
    }

    fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        )
    }

    #[test]
    fn test_parse_valid_features() {
        let data = collection(&[
            feature("ABC123", 100.0, -122.4, 37.8),
            feature("DEF456", 200.0, -121.9, 37.3),
        ]);

        let pings = parse_geojson(&data).unwrap();
        assert_eq!(pings.len(), 2);
        assert_eq!(pings[0].object_id, "ABC123");
        assert_eq!(pings[0].timestamp, 100.0);
        assert_eq!(pings[0].position, Position::new(-122.4, 37.8));
        assert_eq!(pings[0].altitude_ft, 32000.0);
        assert_eq!(pings[0].sighting_id, Some(7));
    }

    #[test]
    fn test_malformed_features_are_skipped() {
        let missing_icao = r#"{"type":"Feature","properties":{"time":100},"geometry":{"type":"Point","coordinates":[1,2]}}"#;
        let missing_time = r#"{"type":"Feature","properties":{"icao":"A"},"geometry":{"type":"Point","coordinates":[1,2]}}"#;
        let missing_geometry = r#"{"type":"Feature","properties":{"icao":"A","time":100}}"#;
        let not_a_point = r#"{"type":"Feature","properties":{"icao":"A","time":100},"geometry":{"type":"LineString","coordinates":[]}}"#;
        let empty_icao = r#"{"type":"Feature","properties":{"icao":"","time":100},"geometry":{"type":"Point","coordinates":[1,2]}}"#;

        let data = collection(&[
            missing_icao.to_string(),
            missing_time.to_string(),
            missing_geometry.to_string(),
            not_a_point.to_string(),
            empty_icao.to_string(),
            feature("OK1", 100.0, 1.0, 2.0),
        ]);

        let pings = parse_geojson(&data).unwrap();
        assert_eq!(pings.len(), 1);
        assert_eq!(pings[0].object_id, "OK1");
    }

    #[test]
    fn test_rejects_non_feature_collection() {
        let data = r#"{"type":"Feature","properties":{},"geometry":null}"#;
        assert!(matches!(
            parse_geojson(data),
            Err(InputError::NotFeatureCollection(_))
        ));
    }

    #[test]
    fn test_empty_collection() {
        let pings = parse_geojson(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(pings.is_empty());
    }
}
