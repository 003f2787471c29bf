use crate::core::{group_for, Ping, Position};
use crate::render::RenderSink;
use crate::replay::timer::TickTask;
use crate::replay::{ReplayConfig, ReplayEvent, ReplayState, TickEvent};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TickOutcome {
    /// A new path point was emitted
    Emitted(TickEvent),
    /// Tick body skipped (paused, or nothing to do)
    Skipped,
    /// Sequence exhausted; the timer must stop
    Finished,
}

/// The deterministic half of the replay: all state transitions live here
///
/// Driven either by the engine's timer or tick-by-tick in tests. Performs no
/// I/O beyond calling into the render sink at the end of each transition.
pub(crate) struct ReplayCore {
    sink: Box<dyn RenderSink>,
    state: ReplayState,
    selected: Option<String>,
    pings: Vec<Ping>,
    step_index: usize,
    path: Vec<Position>,
}

impl ReplayCore {
    pub(crate) fn new(sink: Box<dyn RenderSink>) -> Self {
        Self {
            sink,
            state: ReplayState::Idle,
            selected: None,
            pings: Vec::new(),
            step_index: 0,
            path: Vec::new(),
        }
    }

    pub(crate) fn state(&self) -> ReplayState {
        self.state
    }

    pub(crate) fn path(&self) -> &[Position] {
        &self.path
    }

    /// Take over the replay for a new selection with its ordered pings
    pub(crate) async fn begin(&mut self, object_id: &str, ordered: Vec<Ping>) {
        self.selected = Some(object_id.to_string());
        self.pings = ordered;
        self.restart().await;
    }

    /// Rewind the current selection to the first ping and start playing
    pub(crate) async fn restart(&mut self) {
        let Some(object_id) = self.selected.clone() else {
            return;
        };

        self.step_index = 0;
        self.path.clear();
        self.state = ReplayState::Playing;
        self.sink.lifecycle(ReplayEvent::Started).await;
        self.sink.show_path(&object_id, &self.path).await;

        if self.pings.is_empty() {
            // nothing to animate; end right away so the caller can show "no data"
            self.state = ReplayState::Ended;
            self.sink.lifecycle(ReplayEvent::Finished).await;
        }
    }

    /// Advance the replay by one step
    pub(crate) async fn tick(&mut self) -> TickOutcome {
        if self.state != ReplayState::Playing {
            return TickOutcome::Skipped;
        }
        let Some(object_id) = self.selected.clone() else {
            return TickOutcome::Skipped;
        };

        if self.step_index >= self.pings.len() {
            self.state = ReplayState::Ended;
            self.sink.lifecycle(ReplayEvent::Finished).await;
            return TickOutcome::Finished;
        }

        let ping = self.pings[self.step_index].clone();
        self.path.push(ping.position);
        self.sink.show_path(&object_id, &self.path).await;
        self.sink.show_current_ping(&ping).await;
        self.step_index += 1;

        TickOutcome::Emitted(TickEvent {
            ping,
            path: self.path.clone(),
        })
    }

    /// Flip the pause gate; the timer keeps firing while paused
    pub(crate) fn toggle_pause(&mut self) {
        match self.state {
            ReplayState::Playing => self.state = ReplayState::Paused,
            ReplayState::Paused => self.state = ReplayState::Playing,
            _ => {}
        }
    }

    /// Tear the replay down and return to `Idle`; no-op when already idle
    pub(crate) async fn close(&mut self) {
        if self.state == ReplayState::Idle && self.selected.is_none() {
            return;
        }

        self.selected = None;
        self.pings.clear();
        self.step_index = 0;
        self.path.clear();
        self.state = ReplayState::Idle;

        self.sink.hide_path().await;
        self.sink.clear_all().await;
        self.sink.lifecycle(ReplayEvent::Closed).await;
    }
}

/// Replay engine owning the single live timer and the replay state
///
/// Exactly one replay is live at a time: `select` replaces any prior replay.
/// The stored `TickTask` is canceled before any new one is spawned, even when
/// no timer is believed active, so two timers are never live simultaneously.
pub struct ReplayEngine {
    core: Arc<Mutex<ReplayCore>>,
    config: ReplayConfig,
    timer: Option<TickTask>,
}

impl ReplayEngine {
    pub fn new(sink: Box<dyn RenderSink>) -> Self {
        Self::with_config(sink, ReplayConfig::default())
    }

    pub fn with_config(sink: Box<dyn RenderSink>, config: ReplayConfig) -> Self {
        Self {
            core: Arc::new(Mutex::new(ReplayCore::new(sink))),
            config,
            timer: None,
        }
    }

    /// Current replay state
    pub async fn state(&self) -> ReplayState {
        self.core.lock().await.state()
    }

    /// Snapshot of the cumulative emitted path
    pub async fn emitted_path(&self) -> Vec<Position> {
        self.core.lock().await.path().to_vec()
    }

    /// Start (or restart) a replay for the given object
    ///
    /// Groups `all_pings` by object identity, takes the ordered sequence for
    /// `object_id`, and begins ticking at the configured cadence. An object
    /// with no pings ends immediately without ever ticking.
    pub async fn select(&mut self, object_id: &str, all_pings: &[Ping]) {
        self.cancel_timer();

        let ordered = group_for(all_pings, object_id);
        if ordered.is_empty() {
            info!(object_id, "no pings for selection");
        } else {
            debug!(object_id, count = ordered.len(), "replay selected");
        }

        let mut core = self.core.lock().await;
        core.begin(object_id, ordered).await;
        let playing = core.state() == ReplayState::Playing;
        drop(core);

        if playing {
            self.start_timer();
        }
    }

    /// Toggle play/pause; restarts from the first ping after the replay ended
    pub async fn toggle_play_pause(&mut self) {
        let state = self.core.lock().await.state();
        match state {
            ReplayState::Idle => {}
            ReplayState::Ended => self.restart().await,
            ReplayState::Playing | ReplayState::Paused if self.timer_is_dead() => {
                self.restart().await;
            }
            ReplayState::Playing | ReplayState::Paused => {
                self.core.lock().await.toggle_pause();
            }
        }
    }

    /// Tear the replay down; safe to call from any state, idempotent
    pub async fn close(&mut self) {
        self.cancel_timer();
        self.core.lock().await.close().await;
    }

    async fn restart(&mut self) {
        self.cancel_timer();

        let mut core = self.core.lock().await;
        core.restart().await;
        let playing = core.state() == ReplayState::Playing;
        drop(core);

        if playing {
            self.start_timer();
        }
    }

    /// Cancel-before-replace: dropping the task aborts it. Runs first in
    /// every command that could start a timer, unconditionally.
    fn cancel_timer(&mut self) {
        self.timer = None;
    }

    fn start_timer(&mut self) {
        self.timer = Some(TickTask::spawn(
            self.config.tick_interval,
            Arc::clone(&self.core),
        ));
    }

    fn timer_is_dead(&self) -> bool {
        self.timer.as_ref().map_or(true, |t| t.is_finished())
    }
}
