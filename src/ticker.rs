use std::time::{Duration, Instant};

/// Fixed-period schedule for game ticks with explicit start/stop.
///
/// A stopped ticker never fires. Deadlines advance from the previous
/// deadline so the period does not drift with frame timing; after a stall
/// longer than one period the schedule restarts from `now` instead of firing
/// a burst of catch-up ticks.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Schedules the first tick one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick, or `None` when stopped.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Returns true once per elapsed period and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };

        if now < due {
            return false;
        }

        let next = due + self.interval;
        self.next_due = Some(if next <= now { now + self.interval } else { next });
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Ticker;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn stopped_ticker_never_fires() {
        let mut ticker = Ticker::new(PERIOD);
        let now = Instant::now();

        assert!(!ticker.is_running());
        assert!(!ticker.poll(now + PERIOD * 5));
        assert_eq!(ticker.time_until_due(now), None);
    }

    #[test]
    fn fires_once_per_period() {
        let mut ticker = Ticker::new(PERIOD);
        let start = Instant::now();
        ticker.start(start);

        assert!(!ticker.poll(start + Duration::from_millis(50)));
        assert!(ticker.poll(start + PERIOD));
        assert!(!ticker.poll(start + PERIOD));
        assert!(ticker.poll(start + Duration::from_millis(210)));
        assert_eq!(
            ticker.time_until_due(start + Duration::from_millis(210)),
            Some(Duration::from_millis(90))
        );
    }

    #[test]
    fn stall_resynchronizes_instead_of_bursting() {
        let mut ticker = Ticker::new(PERIOD);
        let start = Instant::now();
        ticker.start(start);

        let late = start + Duration::from_millis(450);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.time_until_due(late), Some(PERIOD));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut ticker = Ticker::new(PERIOD);
        let start = Instant::now();
        ticker.start(start);
        ticker.stop();

        assert!(!ticker.poll(start + PERIOD));
        assert!(!ticker.is_running());
    }
}
