//! Word-Guru
//!
//! A terminal word-guessing game: guess the secret word in a limited number
//! of attempts, with a date-seeded daily word and a local JSON leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guru::config::GameConfig;
//! use word_guru::core::Word;
//! use word_guru::game::{Outcome, Session};
//!
//! let config = GameConfig::default().with_scores_path(None);
//! let mut session = Session::new(config).unwrap();
//! session.start(Word::new("apple").unwrap()).unwrap();
//!
//! let report = session.submit_guess("plane").unwrap();
//! println!("{}", report.feedback.to_emoji());
//!
//! let report = session.submit_guess("apple").unwrap();
//! assert_eq!(report.outcome, Some(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Daily word selection
pub mod daily;

// Word lists
pub mod wordlists;

// Score persistence and leaderboard
pub mod scores;

// Time source
pub mod clock;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
