use std::time::{Duration, Instant};

pub const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 300;

/// Deadline-based save debouncing, polled by the host's tick loop.
#[derive(Debug, Clone)]
pub struct SaveDebouncer {
    delay: Duration,
    armed_at: Option<Instant>,
}

impl SaveDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms (or re-arms) the deadline; an earlier pending deadline is superseded.
    pub fn schedule(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.armed_at.is_some()
    }

    /// `None` when nothing is scheduled or the delay runs past the clock's range.
    pub fn deadline(&self) -> Option<Instant> {
        self.armed_at?.checked_add(self.delay)
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(armed_at) = self.armed_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(armed_at);
        if elapsed < self.delay {
            return false;
        }

        let overshoot = elapsed - self.delay;
        if overshoot.as_millis() > 5 {
            tracing::debug!(
                overshoot_ms = overshoot.as_millis() as u64,
                "save debounce overshoot"
            );
        }

        self.armed_at = None;
        true
    }
}

impl Default for SaveDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SAVE_DEBOUNCE_MS))
    }
}
