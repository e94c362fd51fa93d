//! Word lists for the game
//!
//! A `WordList` is the validated pool targets are drawn from: non-empty,
//! every entry a valid `Word`, every entry the same length.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

use crate::core::Word;
use crate::daily::daily_index;
use crate::error::WordListError;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Ordered, validated, uniform-length list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    word_len: usize,
}

impl WordList {
    /// Build a list from already validated words
    ///
    /// # Errors
    /// - `WordListError::Empty` if `words` is empty
    /// - `WordListError::InvalidWords` if lengths are not uniform
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        let word_len = dominant_length(&words).ok_or(WordListError::Empty)?;

        let problems: Vec<String> = words
            .iter()
            .filter(|w| w.len() != word_len)
            .map(|w| format!("'{w}' (length {}, expected {word_len})", w.len()))
            .collect();

        if !problems.is_empty() {
            return Err(WordListError::InvalidWords(problems));
        }

        Ok(Self { words, word_len })
    }

    /// Validate and build a list from raw strings
    ///
    /// Every entry is trimmed and uppercased. All problems are reported at
    /// once rather than stopping at the first.
    ///
    /// # Errors
    /// Same as [`WordList::new`], plus non-alphabetic entries are reported
    /// in `WordListError::InvalidWords`.
    ///
    /// # Examples
    /// ```
    /// use word_guru::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(["apple", "GRAPE", " peach "]).unwrap();
    /// assert_eq!(list.word_len(), 5);
    /// assert_eq!(list.words()[2].text(), "PEACH");
    ///
    /// assert!(WordList::from_strs(["CAT", "ELEPHANT", "DOG"]).is_err());
    /// ```
    pub fn from_strs<I>(raw: I) -> Result<Self, WordListError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut problems = Vec::new();

        for entry in raw {
            match Word::new(entry.as_ref()) {
                Ok(word) => words.push(word),
                Err(e) => problems.push(e.to_string()),
            }
        }

        if !problems.is_empty() {
            if let Err(WordListError::InvalidWords(more)) = Self::new(words) {
                problems.extend(more);
            }
            return Err(WordListError::InvalidWords(problems));
        }

        Self::new(words)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length shared by every word in the list
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Pick a uniformly random word
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    /// The daily word for `date`
    #[must_use]
    pub fn daily(&self, date: NaiveDate) -> &Word {
        &self.words[daily_index(date, self.words.len())]
    }

    /// The list compiled into the binary from `data/words.txt`
    ///
    /// # Errors
    /// Only if the embedded data is malformed, which the build guards against.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_strs(DEFAULT_WORDS)
    }
}

/// Most common length; ties go to the length seen first
fn dominant_length(words: &[Word]) -> Option<usize> {
    let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
    let mut order = Vec::new();
    for word in words {
        let count = counts.entry(word.len()).or_insert(0);
        if *count == 0 {
            order.push(word.len());
        }
        *count += 1;
    }

    let mut best: Option<(usize, usize)> = None;
    for len in order {
        let count = counts[&len];
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((len, count));
        }
    }
    best.map(|(len, _)| len)
}
