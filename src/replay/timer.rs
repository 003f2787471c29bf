use crate::replay::engine::{ReplayCore, TickOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Periodic tick task with a cancel handle
///
/// The handle is stored exclusively by the owning engine. Replacing or
/// dropping it aborts the task, which is what keeps two timers from ever
/// being live at the same time.
pub(crate) struct TickTask {
    handle: JoinHandle<()>,
}

impl TickTask {
    /// Spawn the periodic tick loop over the shared replay core
    pub(crate) fn spawn(interval: Duration, core: Arc<Mutex<ReplayCore>>) -> Self {
        let handle = tokio::spawn(async move {
            // the first path point appears one full interval after selection
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let outcome = core.lock().await.tick().await;
                if matches!(outcome, TickOutcome::Finished) {
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Whether the tick loop already ran to completion
    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TickTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
