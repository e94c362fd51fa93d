//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use crate::scores::ScoreRecord;
use colored::{ColoredString, Colorize};

/// Style one letter as a tile
///
/// `None` is the fallback for letters with no known status.
#[must_use]
pub fn color_letter(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green(),
        Some(LetterStatus::Present) => tile.black().on_yellow(),
        Some(LetterStatus::Absent) => tile.black().on_white(),
        None => tile.normal(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| color_letter(letter, Some(status)).to_string())
        .collect()
}

/// Format the top scores as a fixed-width table
#[must_use]
pub fn format_leaderboard(records: &[ScoreRecord]) -> String {
    let mut lines = vec![
        "=".repeat(60),
        format!(
            "{:<4} {:<15} {:<8} {:<8} {:<5} {:<12}",
            "Rank", "Player", "Word", "Attempts", "Won", "Date"
        ),
        "-".repeat(60),
    ];

    for (i, record) in records.iter().enumerate() {
        let won = if record.won { "✅" } else { "❌" };
        let date = record.date.get(..10).unwrap_or(&record.date);
        lines.push(format!(
            "{:<4} {:<15} {:<8} {:<8} {:<5} {:<12}",
            i + 1,
            record.player,
            record.word,
            record.attempts,
            won,
            date
        ));
    }

    lines.join("\n") + "\n"
}
