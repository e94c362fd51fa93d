//! Letter knowledge gathered across guesses

use super::formatters::color_letter;
use crate::core::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best status seen so far for each guessed letter
#[derive(Debug, Clone, Default)]
pub struct LetterHints {
    best: FxHashMap<char, LetterStatus>,
}

impl LetterHints {
    /// Fold one scored guess in; a letter never downgrades
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (letter, &status) in guess.text().chars().zip(feedback.statuses()) {
            let entry = self.best.entry(letter).or_insert(status);
            *entry = (*entry).max(status);
        }
    }

    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        self.best.get(&letter.to_ascii_uppercase()).copied()
    }

    /// The alphabet with every letter styled by what is known about it
    #[must_use]
    pub fn render(&self) -> String {
        ('A'..='Z')
            .map(|letter| color_letter(letter, self.status(letter)).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(target: &str, guess: &str) -> (Word, Feedback) {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, &target).unwrap();
        (guess, feedback)
    }

    #[test]
    fn hints_track_best_status() {
        let mut hints = LetterHints::default();
        let (guess, feedback) = scored("APPLE", "PLANE");
        hints.update(&guess, &feedback);

        assert_eq!(hints.status('p'), Some(LetterStatus::Present));
        assert_eq!(hints.status('E'), Some(LetterStatus::Correct));
        assert_eq!(hints.status('N'), Some(LetterStatus::Absent));
        assert_eq!(hints.status('Z'), None);

        let (guess, feedback) = scored("APPLE", "APPLY");
        hints.update(&guess, &feedback);
        assert_eq!(hints.status('P'), Some(LetterStatus::Correct));
    }

    #[test]
    fn hints_never_downgrade() {
        let mut hints = LetterHints::default();
        let (guess, feedback) = scored("APPLE", "ALLOW");
        hints.update(&guess, &feedback);
        // Second L was absent but the first was present
        assert_eq!(hints.status('L'), Some(LetterStatus::Present));
    }

    #[test]
    fn render_covers_alphabet() {
        colored::control::set_override(false);
        let hints = LetterHints::default();
        let rendered = hints.render();
        assert!(rendered.starts_with(" A  B  C "));
        assert!(rendered.ends_with(" Z "));
    }
}
