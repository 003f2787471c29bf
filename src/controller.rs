use crate::core::Ping;
use crate::render::RenderSink;
use crate::replay::{ReplayConfig, ReplayEngine, ReplayState};

/// A user intent from the control surface
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Animate the recorded pings of this object
    Select(String),
    /// The play/pause button was pressed
    TogglePlayPause,
    /// The close button was pressed
    Close,
}

/// Enabled/disabled state of the control surface, derived from engine state
///
/// Presentation-only: which buttons are usable and what the play/pause button
/// should say. The adapter layer renders these however it likes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affordances {
    pub play_pause_enabled: bool,
    pub close_enabled: bool,
    pub play_pause_label: &'static str,
}

/// Translates control-surface intents into replay engine commands, 1:1
pub struct Controller {
    engine: ReplayEngine,
    pings: Vec<Ping>,
}

impl Controller {
    /// Build a controller over a pre-loaded ping collection
    pub fn new(pings: Vec<Ping>, sink: Box<dyn RenderSink>) -> Self {
        Self {
            engine: ReplayEngine::new(sink),
            pings,
        }
    }

    pub fn with_config(pings: Vec<Ping>, sink: Box<dyn RenderSink>, config: ReplayConfig) -> Self {
        Self {
            engine: ReplayEngine::with_config(sink, config),
            pings,
        }
    }

    /// Dispatch one intent to the engine
    pub async fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Select(object_id) => self.engine.select(&object_id, &self.pings).await,
            Intent::TogglePlayPause => self.engine.toggle_play_pause().await,
            Intent::Close => self.engine.close().await,
        }
    }

    pub async fn state(&self) -> ReplayState {
        self.engine.state().await
    }

    /// Current control-surface affordances
    pub async fn affordances(&self) -> Affordances {
        match self.engine.state().await {
            ReplayState::Idle => Affordances {
                play_pause_enabled: false,
                close_enabled: false,
                play_pause_label: "Play",
            },
            ReplayState::Playing => Affordances {
                play_pause_enabled: true,
                close_enabled: true,
                play_pause_label: "Pause",
            },
            ReplayState::Paused | ReplayState::Ended => Affordances {
                play_pause_enabled: true,
                close_enabled: true,
                play_pause_label: "Play",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::render::RecordingSink;

    fn pings() -> Vec<Ping> {
        vec![
            Ping::new("ABC123", 100.0, Position::new(1.0, 0.0), 30000.0),
            Ping::new("ABC123", 101.0, Position::new(2.0, 0.0), 31000.0),
        ]
    }

    fn controller() -> Controller {
        Controller::with_config(
            pings(),
            Box::new(RecordingSink::new()),
            ReplayConfig {
                tick_interval: std::time::Duration::from_millis(100),
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_affordances_track_engine_state() {
        let mut controller = controller();

        let idle = controller.affordances().await;
        assert!(!idle.play_pause_enabled);
        assert!(!idle.close_enabled);
        assert_eq!(idle.play_pause_label, "Play");

        controller.handle(Intent::Select("ABC123".to_string())).await;
        let playing = controller.affordances().await;
        assert!(playing.play_pause_enabled);
        assert!(playing.close_enabled);
        assert_eq!(playing.play_pause_label, "Pause");

        controller.handle(Intent::TogglePlayPause).await;
        assert_eq!(controller.affordances().await.play_pause_label, "Play");

        controller.handle(Intent::Close).await;
        let closed = controller.affordances().await;
        assert!(!closed.play_pause_enabled);
        assert_eq!(controller.state().await, ReplayState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_intents_map_to_engine_commands() {
        let mut controller = controller();

        controller.handle(Intent::Select("ABC123".to_string())).await;
        assert_eq!(controller.state().await, ReplayState::Playing);

        controller.handle(Intent::TogglePlayPause).await;
        assert_eq!(controller.state().await, ReplayState::Paused);

        controller.handle(Intent::TogglePlayPause).await;
        assert_eq!(controller.state().await, ReplayState::Playing);

        controller.handle(Intent::Close).await;
        assert_eq!(controller.state().await, ReplayState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_selecting_object_without_data_ends_immediately() {
        let mut controller = controller();
        controller.handle(Intent::Select("NOPE".to_string())).await;
        assert_eq!(controller.state().await, ReplayState::Ended);
    }
}
