//! Error types
//!
//! One enum per concern. Sequencing errors and input validation errors are
//! kept apart so callers can tell "try again" from "you used the API wrong".

use std::path::PathBuf;

/// Errors from constructing a single `Word`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,

    #[error("'{0}' contains non-alphabetic characters")]
    InvalidCharacters(String),
}

/// Configuration errors raised while building a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list cannot be empty")]
    Empty,

    #[error("words file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read words from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no valid words found in {0}")]
    NoValidWords(PathBuf),

    #[error("invalid words found: {}", .0.join(", "))]
    InvalidWords(Vec<String>),
}

/// Per-guess validation errors. The player may retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("guess must be {expected} letters long, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("guess must contain only letters")]
    InvalidCharacters,
}

/// Errors from the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game not started")]
    NotStarted,

    #[error("game already started")]
    AlreadyStarted,

    #[error("game is already finished")]
    Finished,

    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),
}

impl GameError {
    /// True for input validation failures the player can fix by guessing again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidGuess(_))
    }
}

/// Errors from the JSON score store.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("failed to read scores from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error loading scores from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("score file {0} should contain a list of scores")]
    NotAList(PathBuf),

    #[error("invalid score record: {0}")]
    InvalidRecord(String),

    #[error("error saving score to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors in user-supplied game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
