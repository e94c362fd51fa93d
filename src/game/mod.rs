//! Game state machine
//!
//! `NotStarted -> InProgress -> Finished(Won | Lost)`. Finished is terminal.

mod session;
mod snapshot;

pub use session::{GuessReport, SaveStatus, Session};
pub use snapshot::{DailySnapshot, GameSnapshot};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress,
    Finished(Outcome),
}

impl GameState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }

    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}
