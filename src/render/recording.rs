use async_trait::async_trait;
use crate::core::{Ping, Position};
use crate::render::RenderSink;
use crate::replay::ReplayEvent;
use std::sync::{Arc, Mutex};

/// A single recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Path {
        object_id: String,
        path: Vec<Position>,
    },
    CurrentPing {
        object_id: String,
        timestamp: f64,
    },
    HidePath,
    ClearAll,
    Lifecycle(ReplayEvent),
}

/// Render sink that records every call for later inspection
///
/// The engine takes ownership of its sink, so grab a [`RecordingLog`] handle
/// with [`RecordingSink::log`] before boxing the sink up.
#[derive(Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle onto the recorded call log
    pub fn log(&self) -> RecordingLog {
        RecordingLog {
            calls: Arc::clone(&self.calls),
        }
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RenderSink for RecordingSink {
    async fn show_path(&mut self, object_id: &str, path: &[Position]) {
        self.record(SinkCall::Path {
            object_id: object_id.to_string(),
            path: path.to_vec(),
        });
    }

    async fn show_current_ping(&mut self, ping: &Ping) {
        self.record(SinkCall::CurrentPing {
            object_id: ping.object_id.clone(),
            timestamp: ping.timestamp,
        });
    }

    async fn hide_path(&mut self) {
        self.record(SinkCall::HidePath);
    }

    async fn clear_all(&mut self) {
        self.record(SinkCall::ClearAll);
    }

    async fn lifecycle(&mut self, event: ReplayEvent) {
        self.record(SinkCall::Lifecycle(event));
    }
}

/// Read side of a [`RecordingSink`]
#[derive(Clone)]
pub struct RecordingLog {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl RecordingLog {
    /// Every recorded call, in order
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Object ids of the current-ping updates, in emission order
    pub fn current_ping_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::CurrentPing { object_id, .. } => Some(object_id),
                _ => None,
            })
            .collect()
    }

    /// Path snapshots, in emission order
    pub fn paths(&self) -> Vec<Vec<Position>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::Path { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Lifecycle signals, in emission order
    pub fn lifecycle_events(&self) -> Vec<ReplayEvent> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::Lifecycle(event) => Some(event),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_sink_keeps_call_order() {
        let mut sink = RecordingSink::new();
        let log = sink.log();

        let ping = Ping::new("ABC123", 100.0, Position::new(1.0, 2.0), 30000.0);
        sink.show_path("ABC123", &[ping.position]).await;
        sink.show_current_ping(&ping).await;
        sink.lifecycle(ReplayEvent::Finished).await;

        assert_eq!(
            log.calls(),
            vec![
                SinkCall::Path {
                    object_id: "ABC123".to_string(),
                    path: vec![Position::new(1.0, 2.0)],
                },
                SinkCall::CurrentPing {
                    object_id: "ABC123".to_string(),
                    timestamp: 100.0,
                },
                SinkCall::Lifecycle(ReplayEvent::Finished),
            ]
        );
        assert_eq!(log.current_ping_ids(), vec!["ABC123".to_string()]);
        assert_eq!(log.paths().len(), 1);
    }
}
