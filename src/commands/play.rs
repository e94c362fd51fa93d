//! Interactive guess loop
//!
//! Reads one guess per line until the game finishes or input runs out.
//! Stopping early simply abandons the session; nothing is saved.

use crate::clock::Clock;
use crate::error::GameError;
use crate::game::Session;
use crate::output::{LetterHints, print_guess_result, print_invalid_guess, print_welcome};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Play a started session, reading guesses from `input`
///
/// # Errors
///
/// Returns an error on I/O failure, or if the session was not started.
pub fn run_play<C: Clock, R: BufRead>(session: &mut Session<C>, input: R) -> Result<()> {
    print_welcome(session);

    let mut hints = LetterHints::default();
    let mut lines = input.lines();

    while !session.is_finished() {
        print!(
            "Enter your guess ({}/{}): ",
            session.attempts().len() + 1,
            session.max_attempts()
        );
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!("\n👋 Thanks for playing!");
            return Ok(());
        };
        let line = line.context("failed to read guess")?;
        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }

        match session.submit_guess(guess) {
            Ok(report) => {
                hints.update(&report.guess, &report.feedback);
                print_guess_result(session, &report, &hints);
            }
            Err(GameError::InvalidGuess(e)) => print_invalid_guess(&e),
            Err(e) => return Err(e).context("cannot continue game"),
        }
    }

    Ok(())
}
