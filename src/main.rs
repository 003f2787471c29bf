mod controller;
mod core;
mod input;
mod render;
mod replay;

use crate::controller::{Controller, Intent};
use crate::render::ConsoleSink;
use crate::replay::ReplayState;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: pingtrail <pings.geojson> [icao] [sighting_id]")?;
    let icao_arg = args.next();
    let sighting_arg = args.next();

    let mut pings = input::load_file(&path).with_context(|| format!("loading {path}"))?;
    if let Some(raw) = sighting_arg {
        let sighting_id: i64 = raw.parse().context("sighting_id must be an integer")?;
        pings = input::filter_by_sighting(pings, sighting_id);
        info!(sighting_id, count = pings.len(), "filtered pings by sighting");
    }
    info!(count = pings.len(), "loaded pings");

    // default to the object with the earliest recorded ping
    let icao = match icao_arg {
        Some(icao) => icao,
        None => pings
            .iter()
            .min_by(|a, b| a.timestamp.total_cmp(&b.timestamp))
            .map(|p| p.object_id.clone())
            .context("no pings to replay")?,
    };

    let mut controller = Controller::new(pings, Box::new(ConsoleSink));
    controller.handle(Intent::Select(icao.clone())).await;
    info!(icao = %icao, "replay started");

    while controller.state().await == ReplayState::Playing {
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    controller.handle(Intent::Close).await;
    info!("replay closed");

    Ok(())
}
