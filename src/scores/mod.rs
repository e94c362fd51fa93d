//! Score records and the leaderboard
//!
//! One `ScoreRecord` is written per finished game. Records are stored as a
//! JSON array of objects with exactly these fields:
//!
//! ```json
//! [{"player": "alice", "word": "CRANE", "attempts": 3, "won": true, "date": "2024-06-15T12:00:00.000000Z"}]
//! ```

mod store;

pub use store::ScoreStore;

use crate::error::ScoreError;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default number of rows shown by the leaderboard
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Persisted outcome of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player: String,
    pub word: String,
    pub attempts: u32,
    pub won: bool,
    /// RFC 3339 UTC timestamp with a `Z` suffix
    pub date: String,
}

impl ScoreRecord {
    /// Create a record stamped with `at`
    #[must_use]
    pub fn new(
        player: impl Into<String>,
        word: impl Into<String>,
        attempts: u32,
        won: bool,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            player: player.into(),
            word: word.into(),
            attempts,
            won,
            date: format_timestamp(at),
        }
    }

    /// Parsed `date`, if it is a valid timestamp
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// True if the record's date portion is `day`
    #[must_use]
    pub fn played_on(&self, day: NaiveDate) -> bool {
        self.date.starts_with(&day.format("%Y-%m-%d").to_string())
    }

    /// Check field contents before the record is written
    ///
    /// # Errors
    /// `ScoreError::InvalidRecord` if the player or word is blank or the
    /// date is not an RFC 3339 timestamp.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.player.trim().is_empty() {
            return Err(ScoreError::InvalidRecord("'player' must not be empty".into()));
        }
        if self.word.trim().is_empty() {
            return Err(ScoreError::InvalidRecord("'word' must not be empty".into()));
        }
        if self.timestamp().is_none() {
            return Err(ScoreError::InvalidRecord(format!(
                "'date' must be an ISO-8601 timestamp, got '{}'",
                self.date
            )));
        }
        Ok(())
    }
}

/// Format an instant the way score records store it
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Leaderboard ordering: wins first, then fewer attempts, then most recent.
/// Unparseable dates sort as the oldest.
fn rank(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    let oldest = DateTime::<Utc>::MIN_UTC;
    b.won
        .cmp(&a.won)
        .then(a.attempts.cmp(&b.attempts))
        .then_with(|| {
            let ta = a.timestamp().unwrap_or(oldest);
            let tb = b.timestamp().unwrap_or(oldest);
            tb.cmp(&ta)
        })
}

/// Best `limit` records in leaderboard order
#[must_use]
pub fn top(records: &[ScoreRecord], limit: usize) -> Vec<ScoreRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(rank);
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn record(player: &str, attempts: u32, won: bool, date: &str) -> ScoreRecord {
        ScoreRecord {
            player: player.to_string(),
            word: "CRANE".to_string(),
            attempts,
            won,
            date: date.to_string(),
        }
    }

    #[test]
    fn record_timestamp_format() {
        let at = Utc
            .with_ymd_and_hms(2024, 6, 15, 12, 34, 56)
            .unwrap()
            .with_nanosecond(123_456_000)
            .unwrap();
        let rec = ScoreRecord::new("alice", "CRANE", 3, true, at);
        assert_eq!(rec.date, "2024-06-15T12:34:56.123456Z");
        assert_eq!(rec.timestamp(), Some(at));
    }

    #[test]
    fn record_serializes_fields_in_wire_order() {
        let rec = record("bob", 4, false, "2024-06-15T00:00:00.000000Z");
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"player":"bob","word":"CRANE","attempts":4,"won":false,"date":"2024-06-15T00:00:00.000000Z"}"#
        );
    }

    #[test]
    fn record_validate() {
        assert!(record("a", 1, true, "2024-06-15T00:00:00Z").validate().is_ok());
        assert!(record("", 1, true, "2024-06-15T00:00:00Z").validate().is_err());
        assert!(record("a", 1, true, "yesterday").validate().is_err());
    }

    #[test]
    fn record_played_on() {
        let rec = record("a", 1, true, "2024-06-15T23:59:59.000000Z");
        assert!(rec.played_on(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(!rec.played_on(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()));
    }

    #[test]
    fn top_orders_won_then_attempts() {
        let date = "2024-06-15T12:00:00.000000Z";
        let records = vec![
            record("lost6", 6, false, date),
            record("won5", 5, true, date),
            record("won2", 2, true, date),
        ];
        let ranked: Vec<String> = top(&records, 10).into_iter().map(|r| r.player).collect();
        assert_eq!(ranked, vec!["won2", "won5", "lost6"]);
    }

    #[test]
    fn top_prefers_recent_on_tie() {
        let records = vec![
            record("old", 3, true, "2024-06-14T12:00:00.000000Z"),
            record("new", 3, true, "2024-06-15T12:00:00.000000Z"),
            record("broken", 3, true, "not a date"),
        ];
        let ranked: Vec<String> = top(&records, 10).into_iter().map(|r| r.player).collect();
        assert_eq!(ranked, vec!["new", "old", "broken"]);
    }

    #[test]
    fn top_respects_limit() {
        let records: Vec<ScoreRecord> = (1..=15)
            .map(|i| record(&format!("p{i}"), i, true, "2024-06-15T12:00:00Z"))
            .collect();
        let best = top(&records, 5);
        assert_eq!(best.len(), 5);
        assert_eq!(best[0].player, "p1");
        assert!(top(&[], 10).is_empty());
    }
}
