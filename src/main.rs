//! Word-Guru - CLI
//!
//! Wordle-style word guessing game with a daily word and a local leaderboard.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use word_guru::{
    clock::{Clock, SystemClock},
    commands::{run_play, run_stats},
    config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PLAYER, DEFAULT_SCORES_PATH, GameConfig},
    daily::{is_daily_completed, time_until_next_daily},
    game::Session,
    output::{print_daily_completed, terminal::clear_screen},
    scores::{DEFAULT_LEADERBOARD_LIMIT, ScoreStore},
    wordlists::{WordList, loader::load_from_file},
};

const EXAMPLES: &str = "\
Examples:
  word_guru                          # Play with the built-in word list
  word_guru --daily                  # Play today's daily word
  word_guru --player Alice           # Set player name for scores
  word_guru --max-attempts 8         # Allow 8 attempts instead of 6
  word_guru --stats                  # Show top 10 scores
  word_guru --words animals.txt      # Use a custom word list";

#[derive(Parser)]
#[command(
    name = "word_guru",
    about = "Word-Guru - A customizable Wordle-style word guessing game",
    version,
    author,
    after_help = EXAMPLES
)]
struct Cli {
    /// Play daily word mode (same word for all players each day)
    #[arg(short, long)]
    daily: bool,

    /// Path to word list file (default: built-in list)
    #[arg(long)]
    words: Option<PathBuf>,

    /// Player name for score tracking
    #[arg(long, env = "WORD_GURU_PLAYER", default_value = DEFAULT_PLAYER)]
    player: String,

    /// Maximum number of guess attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Path to scores file
    #[arg(long, env = "WORD_GURU_SCORES", default_value = DEFAULT_SCORES_PATH)]
    scores_path: PathBuf,

    /// Do not record the result of this game
    #[arg(long)]
    no_save: bool,

    /// Show top scores and exit
    #[arg(long)]
    stats: bool,

    /// Number of scores shown by --stats
    #[arg(long, default_value_t = DEFAULT_LEADERBOARD_LIMIT)]
    limit: usize,

    /// Clear the screen before the game starts
    #[arg(long)]
    clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let scores_path = (!self.no_save).then(|| self.scores_path.clone());
        GameConfig::default()
            .with_max_attempts(self.max_attempts)
            .with_player(self.player.clone())
            .with_scores_path(scores_path)
            .with_daily(self.daily)
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the word list from `path`, or the built-in list when none is given
fn load_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("error loading words from '{}'", path.display())),
        None => WordList::embedded().context("built-in word list is invalid"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.game_config();
    config.validate()?;

    if cli.stats {
        return run_stats(&ScoreStore::new(&cli.scores_path), cli.limit);
    }

    let words = load_words(cli.words.as_deref())?;
    let clock = SystemClock;

    if config.daily
        && is_daily_completed(&config.player, config.scores_path.as_deref(), clock.today())
    {
        print_daily_completed(&config.player, &time_until_next_daily(clock.now()));
        return Ok(());
    }

    let mut session = Session::with_clock(config, clock)?;
    session.start_from(&words, &mut rand::rng())?;

    if cli.clear {
        clear_screen().context("failed to clear screen")?;
    }

    run_play(&mut session, io::stdin().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "❌ Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
