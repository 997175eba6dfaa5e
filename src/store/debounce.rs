//! Single-slot debounce timer for scroll offsets

use std::time::{Duration, Instant};

pub const MIN_QUIET_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingScroll {
    offset: u64,
    deadline: Instant,
}

/// Holds at most one pending offset. Arming replaces whatever was pending,
/// so only the last offset of a burst is ever released.
#[derive(Debug, Clone)]
pub struct ScrollDebounce {
    quiet: Duration,
    pending: Option<PendingScroll>,
}

impl Default for ScrollDebounce {
    fn default() -> Self {
        Self::new(MIN_QUIET_PERIOD)
    }
}

impl ScrollDebounce {
    /// Quiet periods shorter than [`MIN_QUIET_PERIOD`] are raised to it
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet: quiet.max(MIN_QUIET_PERIOD),
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    pub fn arm(&mut self, offset: u64, now: Instant) {
        self.pending = Some(PendingScroll {
            offset,
            deadline: now + self.quiet,
        });
    }

    /// Releases the pending offset once its quiet period has elapsed
    pub fn due(&mut self, now: Instant) -> Option<u64> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.offset)
            }
            _ => None,
        }
    }

    /// Releases the pending offset regardless of its deadline
    pub fn take(&mut self) -> Option<u64> {
        self.pending.take().map(|pending| pending.offset)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_period_floor() {
        let debounce = ScrollDebounce::new(Duration::from_millis(20));
        assert_eq!(debounce.quiet_period(), MIN_QUIET_PERIOD);
        let debounce = ScrollDebounce::new(Duration::from_millis(250));
        assert_eq!(debounce.quiet_period(), Duration::from_millis(250));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let start = Instant::now();
        let mut debounce = ScrollDebounce::default();
        debounce.arm(10, start);
        debounce.arm(20, start + Duration::from_millis(80));

        assert_eq!(debounce.due(start + Duration::from_millis(120)), None);
        assert_eq!(debounce.due(start + Duration::from_millis(180)), Some(20));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_take_and_cancel() {
        let start = Instant::now();
        let mut debounce = ScrollDebounce::default();
        debounce.arm(5, start);
        assert_eq!(debounce.take(), Some(5));
        debounce.arm(6, start);
        debounce.cancel();
        assert_eq!(debounce.due(start + Duration::from_secs(1)), None);
    }
}
