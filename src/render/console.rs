use async_trait::async_trait;
use crate::core::{Ping, Position};
use crate::render::RenderSink;
use crate::replay::ReplayEvent;
use tracing::{debug, info};

/// Render sink that narrates the replay to the log
///
/// Stands in for a map layer: path updates are summarized as a point count,
/// and the current ping is printed the way a map popup would show it.
pub struct ConsoleSink;

#[async_trait]
impl RenderSink for ConsoleSink {
    async fn show_path(&mut self, object_id: &str, path: &[Position]) {
        debug!(object_id, points = path.len(), "path updated");
    }

    async fn show_current_ping(&mut self, ping: &Ping) {
        info!(
            "{} | Alt: {} ft | Time: {}",
            ping.object_id,
            ping.altitude_ft,
            ping.time_display()
        );
    }

    async fn hide_path(&mut self) {
        debug!("path hidden");
    }

    async fn clear_all(&mut self) {
        debug!("display cleared");
    }

    async fn lifecycle(&mut self, event: ReplayEvent) {
        info!(?event, "replay lifecycle");
    }
}
