//! Word list loading utilities
//!
//! Word files are line oriented: one word per line, blank lines and lines
//! starting with `#` ignored. Everything else must be a valid word of the
//! list's common length.

use super::WordList;
use crate::error::WordListError;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Entries of a word file, trimmed, with blanks and comments removed
pub fn word_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Parse word file content into a validated list
///
/// # Errors
/// - `WordListError::Empty` if no entries remain after filtering
/// - `WordListError::InvalidWords` for non-alphabetic or odd-length entries
///
/// # Examples
/// ```
/// use word_guru::wordlists::loader::parse_words;
///
/// let list = parse_words("# fruit\napple\n\ngrape\n").unwrap();
/// assert_eq!(list.len(), 2);
/// ```
pub fn parse_words(content: &str) -> Result<WordList, WordListError> {
    WordList::from_strs(word_lines(content))
}

/// Load words from a file
///
/// # Errors
///
/// - `WordListError::NotFound` if the file does not exist
/// - `WordListError::Read` for any other I/O failure
/// - `WordListError::NoValidWords` if the file holds only blanks and comments
/// - `WordListError::InvalidWords` if any entry fails validation
///
/// # Examples
/// ```no_run
/// use word_guru::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WordListError::NotFound(path.to_path_buf())
        } else {
            WordListError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let list = match parse_words(&content) {
        Err(WordListError::Empty) => Err(WordListError::NoValidWords(path.to_path_buf())),
        other => other,
    }?;

    debug!(
        "loaded {} words of length {} from {}",
        list.len(),
        list.word_len(),
        path.display()
    );
    Ok(list)
}
