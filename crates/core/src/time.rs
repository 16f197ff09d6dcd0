//! Wall-clock source for stamping when a game starts and ends.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    /// Stands still until moved with [`Clock::advance`].
    Manual(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn manual(at: DateTime<Utc>) -> Self {
        Self::Manual(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Manual(t) => *t,
        }
    }

    /// Move a manual clock forward. Ignored by the system clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Manual(t) = self {
            *t += delta;
        }
    }

    /// Time since `start`, clamped at zero if the wall clock stepped backwards.
    #[must_use]
    pub fn elapsed_since(&self, start: DateTime<Utc>) -> Duration {
        (self.now() - start).max(Duration::zero())
    }
}

/// Unix seconds of [`test_epoch`] (2023-11-14T22:13:20Z).
pub const TEST_EPOCH_SECS: i64 = 1_700_000_000;

/// # Panics
///
/// Panics if the epoch cannot be represented.
#[must_use]
pub fn test_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(TEST_EPOCH_SECS, 0).expect("test epoch should be valid")
}

/// A manual clock parked at [`test_epoch`].
#[must_use]
pub fn test_clock() -> Clock {
    Clock::manual(test_epoch())
}
