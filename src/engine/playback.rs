// Auto-play timer owned by an engine

use std::time::{Duration, Instant};

/// A repeating deadline. Dropping it cancels auto-play.
///
/// The owner polls [`PlaybackTimer::fire`] from its event loop; at most one
/// tick fires per poll, and the next deadline is one interval after the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTimer {
    interval: Duration,
    next_due: Instant,
}

impl PlaybackTimer {
    /// First tick one interval after `now`
    pub fn start(interval: Duration, now: Instant) -> Self {
        PlaybackTimer {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Time left before the next tick (zero if overdue)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Returns true and reschedules if the deadline has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let t0 = Instant::now();
        let interval = Duration::from_millis(100);
        let mut timer = PlaybackTimer::start(interval, t0);

        assert!(!timer.fire(t0));
        assert!(!timer.fire(t0 + Duration::from_millis(99)));
        assert!(timer.fire(t0 + interval));
        assert_eq!(timer.next_due(), t0 + interval * 2);
        // rescheduled from the tick, so an immediate second poll does nothing
        assert!(!timer.fire(t0 + interval));
        assert!(timer.fire(t0 + interval * 2));
    }

    #[test]
    fn test_remaining() {
        let t0 = Instant::now();
        let timer = PlaybackTimer::start(Duration::from_millis(250), t0);
        assert_eq!(timer.interval(), Duration::from_millis(250));
        assert_eq!(timer.next_due(), t0 + timer.interval());
        assert_eq!(timer.remaining(t0), Duration::from_millis(250));
        assert_eq!(timer.remaining(t0 + Duration::from_secs(1)), Duration::ZERO);
    }
}
