pub mod console;
pub mod recording;

pub use console::ConsoleSink;
pub use recording::{RecordingLog, RecordingSink, SinkCall};

use async_trait::async_trait;
use crate::core::{Ping, Position};
use crate::replay::ReplayEvent;

/// Interface the replay core uses to request visual updates
///
/// This trait is the rendering boundary: implementations may draw on a map
/// layer, narrate to a log, or record calls for tests. The replay core makes
/// no assumption about the rendering technology behind it.
#[async_trait]
pub trait RenderSink: Send {
    /// Replace the rendered path for the object with the given prefix
    async fn show_path(&mut self, object_id: &str, path: &[Position]);

    /// Move the current-position marker to this ping
    async fn show_current_ping(&mut self, ping: &Ping);

    /// Hide the rendered path without touching other layers
    async fn hide_path(&mut self);

    /// Remove everything this sink has drawn
    async fn clear_all(&mut self);

    /// Replay lifecycle notification
    async fn lifecycle(&mut self, event: ReplayEvent);
}
