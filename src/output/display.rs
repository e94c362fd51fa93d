//! Messages printed around a game

use super::LetterHints;
use super::formatters::{colored_guess, format_leaderboard};
use crate::clock::Clock;
use crate::daily::time_until_next_daily;
use crate::error::GuessError;
use crate::game::{GuessReport, Outcome, SaveStatus, Session};
use crate::scores::ScoreRecord;
use colored::Colorize;

/// Print the banner shown when a game starts
pub fn print_welcome<C: Clock>(session: &Session<C>) {
    println!("{}", "🎯 Word-Guru Started!".bright_cyan().bold());
    if session.config().daily {
        println!("📅 Daily word for {}", session.clock().today());
    }
    println!(
        "Guess the {}-letter word in {} attempts!",
        session.word_len().unwrap_or_default(),
        session.max_attempts()
    );
    println!("Letters will be colored: 🟩 Correct position, 🟨 Wrong position, ⬜ Not in word\n");
}

/// Print a scored guess, the keyboard, and the end-of-game messages if any
pub fn print_guess_result<C: Clock>(session: &Session<C>, report: &GuessReport, hints: &LetterHints) {
    println!(
        "{}  {}",
        colored_guess(&report.guess, &report.feedback),
        report.summary.join(" ")
    );

    let Some(outcome) = report.outcome else {
        println!("{}\n", hints.render());
        return;
    };

    let target = session
        .revealed_target()
        .map(|w| w.text().to_string())
        .unwrap_or_default();

    println!();
    match outcome {
        Outcome::Won => println!(
            "{}",
            format!(
                "🎉 Congratulations! You guessed '{target}' in {} attempts!",
                session.attempts().len()
            )
            .green()
            .bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!("💔 Game over! The word was '{target}'").red().bold()
        ),
    }

    match &report.save {
        SaveStatus::Saved => println!("💾 Score saved for player '{}'", session.config().player),
        SaveStatus::Failed(reason) => {
            println!("{}", format!("⚠️  Warning: Could not save score: {reason}").yellow());
            if let Some(path) = &session.config().scores_path {
                println!(
                    "{}",
                    format!(
                        "   Scores will not be recorded until '{}' is repaired or removed.",
                        path.display()
                    )
                    .yellow()
                );
            }
        }
        SaveStatus::Disabled | SaveStatus::NotFinished => {}
    }

    if session.config().daily {
        println!(
            "⏰ Next daily word in: {}",
            time_until_next_daily(session.clock().now())
        );
    }
}

pub fn print_invalid_guess(error: &GuessError) {
    println!("{}", format!("❌ Invalid guess: {error}").red());
}

/// Print the notice shown when today's daily word was already played
pub fn print_daily_completed(player: &str, countdown: &str) {
    println!("{}", "🎯 Daily Word Already Completed!".bright_yellow().bold());
    println!("You've already played today's daily word, {player}.");
    println!("⏰ Next daily word available in: {countdown}");
    println!("\n💡 Try playing without --daily flag for random words!");
}

/// Print the leaderboard, or a hint when it is empty
pub fn print_leaderboard(records: &[ScoreRecord]) {
    if records.is_empty() {
        println!("📊 No scores found yet. Play some games to see stats!");
        return;
    }

    println!("{}", format!("📊 Top {} Scores:", records.len()).bright_cyan().bold());
    print!("{}", format_leaderboard(records));
}
