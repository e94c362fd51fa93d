//! Game word representation
//!
//! A `Word` is a non-empty, uppercase, ASCII-alphabetic string. Length is not
//! fixed here; word lists enforce a uniform length for a whole game.

use crate::error::WordError;
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased before
    /// validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_guru::core::Word;
    ///
    /// let word = Word::new(" crane ").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the scorer to handle duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
