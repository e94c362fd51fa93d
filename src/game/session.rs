//! A single game session

use super::snapshot::{DailySnapshot, GameSnapshot};
use super::{GameState, Outcome};
use crate::clock::{Clock, SystemClock};
use crate::config::GameConfig;
use crate::core::{Feedback, Word, score};
use crate::daily;
use crate::error::{ConfigError, GameError, GuessError};
use crate::scores::{ScoreRecord, ScoreStore};
use crate::wordlists::WordList;
use log::{debug, warn};
use rand::Rng;

/// What happened to the score record when a guess ended the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// The game is still running
    NotFinished,
    /// No scores path configured
    Disabled,
    Saved,
    /// Persisting failed; the game result stands regardless
    Failed(String),
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub guess: Word,
    pub feedback: Feedback,
    /// Letters paired with their markers, e.g. `["A✓", "L~", "W✗"]`
    pub summary: Vec<String>,
    /// Set when this guess ended the game
    pub outcome: Option<Outcome>,
    pub save: SaveStatus,
}

/// Game state machine wrapping the scorer
///
/// Owns the attempt history exclusively; not meant to be shared across
/// threads without external synchronisation.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    config: GameConfig,
    clock: C,
    target: Option<Word>,
    attempts: Vec<Word>,
    state: GameState,
}

impl Session<SystemClock> {
    /// Create a session reading the system clock
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Create a session with an explicit time source
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_clock(config: GameConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            target: None,
            attempts: Vec::new(),
            state: GameState::NotStarted,
        })
    }

    /// Begin play with `target` as the secret word
    ///
    /// # Errors
    /// `GameError::AlreadyStarted` unless the session is `NotStarted`.
    pub fn start(&mut self, target: Word) -> Result<(), GameError> {
        if self.state != GameState::NotStarted {
            return Err(GameError::AlreadyStarted);
        }

        self.target = Some(target);
        self.attempts.clear();
        self.state = GameState::InProgress;
        Ok(())
    }

    /// Start with a uniformly random word from `words`
    ///
    /// # Errors
    /// `GameError::AlreadyStarted` unless the session is `NotStarted`.
    pub fn start_random<R: Rng + ?Sized>(
        &mut self,
        words: &WordList,
        rng: &mut R,
    ) -> Result<(), GameError> {
        debug!("starting random game from {} words", words.len());
        self.start(words.choose_random(rng).clone())
    }

    /// Start with the word of the clock's current UTC day
    ///
    /// # Errors
    /// `GameError::AlreadyStarted` unless the session is `NotStarted`.
    pub fn start_daily(&mut self, words: &WordList) -> Result<(), GameError> {
        let today = self.clock.today();
        debug!("starting daily game for {today}");
        self.start(words.daily(today).clone())
    }

    /// Start in the mode the config asks for
    ///
    /// # Errors
    /// `GameError::AlreadyStarted` unless the session is `NotStarted`.
    pub fn start_from<R: Rng + ?Sized>(
        &mut self,
        words: &WordList,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if self.config.daily {
            self.start_daily(words)
        } else {
            self.start_random(words, rng)
        }
    }

    /// Score a guess and advance the game
    ///
    /// The raw guess is trimmed and uppercased. Validation happens before any
    /// mutation, so a rejected guess leaves the session untouched.
    ///
    /// # Errors
    /// - `GameError::NotStarted` before `start`
    /// - `GameError::Finished` once the game is over
    /// - `GameError::InvalidGuess` for wrong length or non-letters
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<GuessReport, GameError> {
        match self.state {
            GameState::NotStarted => return Err(GameError::NotStarted),
            GameState::Finished(_) => return Err(GameError::Finished),
            GameState::InProgress => {}
        }
        let target = self.target.as_ref().ok_or(GameError::NotStarted)?;

        let normalized = raw_guess.trim().to_ascii_uppercase();
        let feedback = score(target, &normalized).inspect_err(|e| {
            debug!("rejected guess: {e}");
        })?;
        let guess = Word::new(&normalized).map_err(|_| GuessError::InvalidCharacters)?;
        let won = guess == *target;
        let summary = feedback.summary(&guess);

        self.attempts.push(guess.clone());

        if won {
            self.state = GameState::Finished(Outcome::Won);
        } else if self.attempts.len() >= self.config.max_attempts {
            self.state = GameState::Finished(Outcome::Lost);
        }

        let outcome = self.state.outcome();
        let save = match outcome {
            Some(outcome) => self.record_score(outcome),
            None => SaveStatus::NotFinished,
        };

        Ok(GuessReport {
            guess,
            feedback,
            summary,
            outcome,
            save,
        })
    }

    /// Persist the finished game. Failures are reported, never propagated.
    fn record_score(&self, outcome: Outcome) -> SaveStatus {
        let (Some(path), Some(target)) = (&self.config.scores_path, &self.target) else {
            return SaveStatus::Disabled;
        };

        let record = ScoreRecord::new(
            self.config.player.clone(),
            target.text(),
            u32::try_from(self.attempts.len()).unwrap_or(u32::MAX),
            outcome == Outcome::Won,
            self.clock.now(),
        );

        match ScoreStore::new(path).save(&record) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                warn!("could not save score: {e}");
                SaveStatus::Failed(e.to_string())
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.state == GameState::Finished(Outcome::Won)
    }

    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts.len())
    }

    /// Length of the target word, once started
    #[must_use]
    pub fn word_len(&self) -> Option<usize> {
        self.target.as_ref().map(Word::len)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The target, only once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        if self.is_finished() {
            self.target.as_ref()
        } else {
            None
        }
    }

    /// The target at any time; for tests and debugging only
    #[must_use]
    pub fn debug_target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// Player-facing view of the session; never includes the target
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let daily = self.config.daily.then(|| {
            let now = self.clock.now();
            let today = now.date_naive();
            DailySnapshot {
                time_until_next_daily: daily::time_until_next_daily(now),
                daily_completed: daily::is_daily_completed(
                    &self.config.player,
                    self.config.scores_path.as_deref(),
                    today,
                ),
                today,
            }
        });

        GameSnapshot {
            target: None,
            attempts: self.attempts.iter().map(|w| w.text().to_string()).collect(),
            attempts_remaining: self.attempts_remaining(),
            total_attempts: self.attempts.len(),
            max_attempts: self.config.max_attempts,
            game_over: self.is_finished(),
            won: self.won(),
            player: self.config.player.clone(),
            scores_path: self.config.scores_path.clone(),
            daily_mode: self.config.daily,
            daily,
        }
    }

    /// Snapshot including the target word
    #[must_use]
    pub fn debug_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            target: self.target.as_ref().map(|w| w.text().to_string()),
            ..self.snapshot()
        }
    }
}
