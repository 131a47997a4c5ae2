//! Repeating timer driven by polling
//!
//! The host loop calls [`Timer::poll`] as often as it likes; the timer reports
//! at most one fire per call. A host that polls late gets a late tick, never a
//! burst of catch-up ticks.

use std::time::Duration;

use super::clock::Clock;

/// A repeating timer the scheduler can arm and disarm
pub trait Timer {
    /// Start firing every `interval`, first fire one interval from now.
    /// Arming an armed timer restarts it with the new interval.
    fn arm(&mut self, interval: Duration);

    /// Stop firing.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;

    /// Returns true if the timer has fired since the last poll.
    fn poll(&mut self) -> bool;

    /// Time left until the next fire, `None` when disarmed.
    fn remaining(&self) -> Option<Duration>;
}

#[derive(Debug, Clone, Copy)]
struct Schedule {
    interval: Duration,
    deadline: Duration,
}

/// Deadline timer over any [`Clock`]
#[derive(Debug)]
pub struct IntervalTimer<C> {
    clock: C,
    schedule: Option<Schedule>,
}

impl<C: Clock> IntervalTimer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            schedule: None,
        }
    }

    /// Current interval, `None` when disarmed.
    pub fn interval(&self) -> Option<Duration> {
        self.schedule.map(|s| s.interval)
    }
}

impl<C: Clock> Timer for IntervalTimer<C> {
    fn arm(&mut self, interval: Duration) {
        // A zero interval would fire on every poll
        let interval = interval.max(Duration::from_micros(1));
        self.schedule = Some(Schedule {
            interval,
            deadline: self.clock.now() + interval,
        });
    }

    fn disarm(&mut self) {
        self.schedule = None;
    }

    fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    fn poll(&mut self) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };

        let now = self.clock.now();
        if now < schedule.deadline {
            return false;
        }

        // Stay on the original grid unless we are already a whole interval behind
        let next = schedule.deadline + schedule.interval;
        schedule.deadline = if next > now {
            next
        } else {
            now + schedule.interval
        };
        true
    }

    fn remaining(&self) -> Option<Duration> {
        self.schedule
            .map(|s| s.deadline.saturating_sub(self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::ManualClock;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_once_per_interval() {
        let clock = ManualClock::new();
        let mut timer = IntervalTimer::new(clock.clone());
        timer.arm(100 * MS);

        clock.advance(99 * MS);
        assert!(!timer.poll());

        clock.advance(MS);
        assert!(timer.poll());
        assert!(!timer.poll(), "one fire per deadline");

        clock.advance(100 * MS);
        assert!(timer.poll());
    }

    #[test]
    fn late_poll_fires_once_and_keeps_grid() {
        let clock = ManualClock::new();
        let mut timer = IntervalTimer::new(clock.clone());
        timer.arm(100 * MS);

        // polled 30ms late: next deadline stays at 200ms
        clock.set(130 * MS);
        assert!(timer.poll());
        assert_eq!(timer.remaining(), Some(70 * MS));
    }

    #[test]
    fn very_late_poll_is_not_batched() {
        let clock = ManualClock::new();
        let mut timer = IntervalTimer::new(clock.clone());
        timer.arm(100 * MS);

        // three intervals late: a single fire, then a full interval from now
        clock.set(350 * MS);
        assert!(timer.poll());
        assert!(!timer.poll());
        assert_eq!(timer.remaining(), Some(100 * MS));
    }

    #[test]
    fn rearm_restarts_from_now() {
        let clock = ManualClock::new();
        let mut timer = IntervalTimer::new(clock.clone());
        timer.arm(500 * MS);

        clock.advance(400 * MS);
        timer.arm(250 * MS);
        assert_eq!(timer.interval(), Some(250 * MS));

        clock.advance(200 * MS);
        assert!(!timer.poll());
        clock.advance(50 * MS);
        assert!(timer.poll());
    }

    #[test]
    fn disarmed_timer_never_fires() {
        let clock = ManualClock::new();
        let mut timer = IntervalTimer::new(clock.clone());
        timer.arm(10 * MS);
        timer.disarm();

        clock.advance(Duration::from_secs(1));
        assert!(!timer.poll());
        assert!(!timer.is_armed());
        assert_eq!(timer.remaining(), None);
    }
}
