//! Core domain types for the game
//!
//! Pure, I/O-free types: validated words and the guess scorer.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, score};
pub use word::Word;
