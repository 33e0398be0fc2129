use crate::state::ActorTemplate;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of narration lines kept before the oldest is overwritten.
    pub event_log_capacity: usize,
    /// Stat block the player spawns with.
    pub player: ActorTemplate,
}

impl GameConfig {
    pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            event_log_capacity: Self::DEFAULT_EVENT_LOG_CAPACITY,
            player: ActorTemplate::player(),
        }
    }

    #[must_use]
    pub fn with_event_log_capacity(mut self, event_log_capacity: usize) -> Self {
        self.event_log_capacity = event_log_capacity;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
