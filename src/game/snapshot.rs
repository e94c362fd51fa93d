//! Read-only views of a session for display and testing

use chrono::NaiveDate;
use std::path::PathBuf;

/// Everything about a session at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Only filled by `Session::debug_snapshot`
    pub target: Option<String>,
    pub attempts: Vec<String>,
    pub attempts_remaining: usize,
    pub total_attempts: usize,
    pub max_attempts: usize,
    pub game_over: bool,
    pub won: bool,
    pub player: String,
    pub scores_path: Option<PathBuf>,
    pub daily_mode: bool,
    /// Present only in daily mode
    pub daily: Option<DailySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySnapshot {
    pub time_until_next_daily: String,
    pub daily_completed: bool,
    pub today: NaiveDate,
}
