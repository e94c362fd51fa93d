//! Leaderboard command

use crate::output::print_leaderboard;
use crate::scores::{ScoreStore, top};
use anyhow::{Context, Result};

/// Print the best `limit` scores from `store`
///
/// # Errors
///
/// Returns an error if the score file exists but cannot be loaded.
pub fn run_stats(store: &ScoreStore, limit: usize) -> Result<()> {
    let records = store
        .load()
        .with_context(|| format!("error loading stats from {}", store.path().display()))?;
    print_leaderboard(&top(&records, limit));
    Ok(())
}
