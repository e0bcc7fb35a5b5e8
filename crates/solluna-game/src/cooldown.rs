use std::time::{Duration, Instant};

/// Minimum delay between two served hints.
pub const HINT_COOLDOWN: Duration = Duration::from_secs(20);

/// Tracks when the last hint was served.
///
/// The current time is always passed in by the caller, so the game loop
/// owns the clock and tests can replay any schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct HintCooldown {
    last_hint: Option<Instant>,
}

impl HintCooldown {
    /// Returns the time left before the next hint, or `None` when a hint
    /// may be served at `now`.
    pub(crate) fn remaining(self, now: Instant) -> Option<Duration> {
        let elapsed = now.duration_since(self.last_hint?);
        HINT_COOLDOWN
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Records that a hint was served at `now`.
    pub(crate) fn start(&mut self, now: Instant) {
        self.last_hint = Some(now);
    }
}
