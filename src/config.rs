//! Game configuration

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
pub const DEFAULT_PLAYER: &str = "anonymous";
pub const DEFAULT_SCORES_PATH: &str = "scores.json";

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub player: String,
    /// Where finished games are recorded; `None` disables persistence
    pub scores_path: Option<PathBuf>,
    pub daily: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            player: DEFAULT_PLAYER.to_string(),
            scores_path: Some(PathBuf::from(DEFAULT_SCORES_PATH)),
            daily: false,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = player.into();
        self
    }

    #[must_use]
    pub fn with_scores_path(mut self, scores_path: Option<PathBuf>) -> Self {
        self.scores_path = scores_path;
        self
    }

    #[must_use]
    pub fn with_daily(mut self, daily: bool) -> Self {
        self.daily = daily;
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// `ConfigError::Validation` if `max_attempts` is zero or the player
    /// name is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts < 1 {
            return Err(ConfigError::Validation(
                "max-attempts must be at least 1".into(),
            ));
        }
        if self.player.trim().is_empty() {
            return Err(ConfigError::Validation("player name must not be empty".into()));
        }
        Ok(())
    }
}
