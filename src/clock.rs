//! Current-time provider
//!
//! Everything that depends on "now" (daily word, countdowns, score
//! timestamps) reads it through a `Clock` so tests can pin the time.

use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
