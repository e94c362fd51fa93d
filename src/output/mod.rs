//! Terminal output formatting
//!
//! Colored letter tiles, keyboard hints, leaderboard tables and the
//! messages printed around a game.

pub mod display;
pub mod formatters;
pub mod keyboard;
pub mod terminal;

pub use display::{
    print_daily_completed, print_guess_result, print_invalid_guess, print_leaderboard,
    print_welcome,
};
pub use keyboard::LetterHints;
