//! Daily word mode
//!
//! Every player gets the same word on the same UTC date. The word is picked
//! by hashing the date, so the choice depends only on the date and the order
//! of the word list.

use crate::core::Word;
use crate::error::WordListError;
use crate::scores::ScoreStore;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use log::warn;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Seed derived from a date: the first four bytes of SHA-256("YYYY-MM-DD"),
/// i.e. the first 8 hex digits of the digest, read as an unsigned integer
#[must_use]
pub fn daily_seed(date: NaiveDate) -> u32 {
    let digest = Sha256::digest(date.format("%Y-%m-%d").to_string().as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Select the word for `date`
///
/// # Errors
/// `WordListError::Empty` if `words` is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use word_guru::core::Word;
/// use word_guru::daily::select_daily_word;
///
/// let words: Vec<Word> = ["APPLE", "GRAPE", "PEACH"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let first = select_daily_word(&words, date).unwrap();
/// let second = select_daily_word(&words, date).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn select_daily_word(words: &[Word], date: NaiveDate) -> Result<Word, WordListError> {
    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    Ok(words[daily_index(date, words.len())].clone())
}

/// Index into a list of `len` words for `date`; `len` must be non-zero
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    daily_seed(date) as usize % len
}

/// The next midnight UTC strictly after `now`
#[must_use]
pub fn next_daily_reset(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc() + TimeDelta::days(1)
}

/// Human-readable remaining time using the largest nonzero unit pair
///
/// `"5h 23m"`, `"23m 45s"` or `"45s"`. Negative durations read as `"0s"`.
#[must_use]
pub fn format_countdown(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Countdown until the next daily word becomes available
#[must_use]
pub fn time_until_next_daily(now: DateTime<Utc>) -> String {
    format_countdown(next_daily_reset(now) - now)
}

/// Check whether `player` already has a score recorded on `today`
///
/// Never fails: a missing path, missing file or unreadable store all read as
/// "not completed" so a corrupt score file cannot block play.
#[must_use]
pub fn is_daily_completed(player: &str, scores_path: Option<&Path>, today: NaiveDate) -> bool {
    let Some(path) = scores_path else {
        return false;
    };

    match ScoreStore::new(path).load() {
        Ok(records) => records
            .iter()
            .rev()
            .any(|r| r.player == player && r.played_on(today)),
        Err(e) => {
            warn!("could not check daily completion, assuming not completed: {e}");
            false
        }
    }
}
