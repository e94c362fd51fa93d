//! Guess scoring and per-letter feedback
//!
//! Each guess letter is classified as:
//! - Correct: right letter, right position
//! - Present: letter is in the target, wrong position
//! - Absent: letter is not in the target (or all its copies are used up)

use super::Word;
use crate::error::GuessError;
use std::fmt;

/// Status of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Lowercase name used in text output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Marker appended to a letter in the textual summary
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Correct => '✓',
            Self::Present => '~',
            Self::Absent => '✗',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-letter result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. Count each letter of the target
    /// 2. First pass, left to right: exact matches are Correct and consume one
    ///    copy of their letter
    /// 3. Second pass, left to right: remaining letters are Present while
    ///    unconsumed copies remain, Absent otherwise
    ///
    /// # Errors
    /// Returns `GuessError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use word_guru::core::{Feedback, LetterStatus, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("plane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨🟨🟨⬜🟩");
    /// assert_eq!(feedback.statuses()[4], LetterStatus::Correct);
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, GuessError> {
        if guess.len() != target.len() {
            return Err(GuessError::LengthMismatch {
                expected: target.len(),
                found: guess.len(),
            });
        }

        let guess_bytes = guess.bytes();
        let target_bytes = target.bytes();
        let mut available = target.letter_counts();
        let mut result = vec![LetterStatus::Absent; guess.len()];

        // First pass: exact position matches
        for (i, (&g, &t)) in guess_bytes.iter().zip(target_bytes).enumerate() {
            if g == t {
                result[i] = LetterStatus::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters claim what is left
        for (i, &g) in guess_bytes.iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Textual rendering pairing each letter with its marker, e.g. `["A✓", "L~", "W✗"]`
    #[must_use]
    pub fn summary(&self, guess: &Word) -> Vec<String> {
        guess
            .text()
            .chars()
            .zip(&self.0)
            .map(|(letter, status)| format!("{letter}{}", status.marker()))
            .collect()
    }
}

/// Score a raw guess against a normalized target
///
/// The guess is uppercased but not trimmed; it must be purely alphabetic.
///
/// # Errors
/// - `GuessError::LengthMismatch` if the guess length differs from the target
/// - `GuessError::InvalidCharacters` if the guess is not ASCII letters only
pub fn score(target: &Word, guess: &str) -> Result<Feedback, GuessError> {
    let found = guess.chars().count();
    if found != target.len() {
        return Err(GuessError::LengthMismatch {
            expected: target.len(),
            found,
        });
    }

    if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuessError::InvalidCharacters);
    }

    let guess = Word::new(guess).map_err(|_| GuessError::InvalidCharacters)?;
    Feedback::calculate(&guess, target)
}
