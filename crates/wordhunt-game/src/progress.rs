//! The player's persisted progress record.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DEFAULT_HINTS;

/// Best completion time and hint budget, kept between sessions.
///
/// Storage is up to the caller; the record serializes to a small JSON object
/// such as `{"bestTimeMs":83120,"hintsRemaining":2}`. Missing fields take
/// their default values, so older or partial records still load.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use wordhunt_game::Progress;
///
/// let mut progress = Progress::default();
/// assert!(progress.record_completion(Duration::from_secs(90)));
/// assert!(!progress.record_completion(Duration::from_secs(120)));
/// assert_eq!(progress.best_time(), Some(Duration::from_secs(90)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Progress {
    best_time_ms: Option<u64>,
    hints_remaining: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            best_time_ms: None,
            hints_remaining: DEFAULT_HINTS,
        }
    }
}

impl Progress {
    /// Returns the fastest recorded completion time.
    #[must_use]
    pub fn best_time(&self) -> Option<Duration> {
        self.best_time_ms.map(Duration::from_millis)
    }

    /// Returns the number of hints left.
    #[must_use]
    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    /// Records a completion time, keeping the fastest one.
    ///
    /// Returns `true` if `elapsed` is a new best time.
    pub fn record_completion(&mut self, elapsed: Duration) -> bool {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match self.best_time_ms {
            Some(best) if best <= elapsed_ms => false,
            _ => {
                self.best_time_ms = Some(elapsed_ms);
                true
            }
        }
    }

    /// Uses up one hint. Returns `false` if none was left.
    pub fn consume_hint(&mut self) -> bool {
        if self.hints_remaining == 0 {
            return false;
        }
        self.hints_remaining -= 1;
        true
    }

    /// Restores the hint budget to [`DEFAULT_HINTS`].
    pub fn reset_hints(&mut self) {
        self.hints_remaining = DEFAULT_HINTS;
    }
}
