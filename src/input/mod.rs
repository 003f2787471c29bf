pub mod geojson;

pub use geojson::{load_geojson, parse_geojson, InputError};

use anyhow::Result;
use crate::core::Ping;

/// Input format detection result
#[derive(Debug, Clone)]
pub enum InputFormat {
    GeoJson,
    Unknown,
}

/// Detect the format of an input file from its head
pub fn detect_format(data: &[u8]) -> InputFormat {
    let head = &data[..data.len().min(512)];
    match std::str::from_utf8(head) {
        Ok(text) if text.trim_start().starts_with('{') && text.contains("FeatureCollection") => {
            InputFormat::GeoJson
        }
        _ => InputFormat::Unknown,
    }
}

/// Load pings from a file, auto-detecting format
pub fn load_file(path: &str) -> Result<Vec<Ping>> {
    let data = std::fs::read(path)?;

    match detect_format(&data) {
        InputFormat::GeoJson => Ok(load_geojson(path)?),
        InputFormat::Unknown => anyhow::bail!("Unknown input format"),
    }
}

/// Keep only the pings recorded under the given sighting
pub fn filter_by_sighting(pings: Vec<Ping>, sighting_id: i64) -> Vec<Ping> {
    pings
        .into_iter()
        .filter(|p| p.sighting_id == Some(sighting_id))
        .collect()
}
