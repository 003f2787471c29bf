pub mod engine;
pub mod timer;

pub use engine::ReplayEngine;

use crate::core::{Ping, Position};
use std::time::Duration;

/// Replay lifecycle state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayState {
    /// No object selected
    Idle,
    /// Timer live, path advancing
    Playing,
    /// Timer live, tick body gated
    Paused,
    /// Sequence exhausted; a toggle restarts from the first ping
    Ended,
}

/// Replay configuration
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Fixed display cadence between path points. The cadence is constant
    /// regardless of the recorded time gaps between pings.
    pub tick_interval: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(1000),
        }
    }
}

/// One fixed-interval advance of the replay
#[derive(Debug, Clone, PartialEq)]
pub struct TickEvent {
    /// The ping reached on this tick
    pub ping: Ping,
    /// Snapshot of the cumulative emitted path, ending at `ping`
    pub path: Vec<Position>,
}

/// Lifecycle signals delivered to the render sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayEvent {
    Started,
    Finished,
    Closed,
}
