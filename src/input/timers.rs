//! Deadline tracking for simulation timers.
//!
//! The simulation requests re-arms through `Scheduler`; this queue turns
//! them into `Instant` deadlines the event loop can poll against.

use std::time::{Duration, Instant};

use crate::core::Scheduler;
use crate::types::Timer;

/// Pending timer deadlines. Only a couple are ever live at once, so a
/// plain vector beats a real priority queue here.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(Instant, Timer)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(at, _)| *at).min()
    }

    /// Remove and return one due timer, earliest deadline first.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (at, _))| *at <= now)
            .min_by_key(|(_, (at, _))| *at)
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(idx).1)
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, timer: Timer, delay: Duration) {
        self.pending.push((Instant::now() + delay, timer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_empty_queue_has_no_deadline() {
        let mut queue = TimerQueue::new();
        assert!(queue.next_deadline().is_none());
        assert!(queue.pop_due(Instant::now()).is_none());
    }

    #[test]
    fn test_zero_delay_is_immediately_due() {
        let mut queue = TimerQueue::new();
        queue.schedule(Timer::Tick, Duration::ZERO);

        assert_eq!(queue.pop_due(Instant::now()), Some(Timer::Tick));
        assert!(queue.pop_due(Instant::now()).is_none());
    }

    #[test]
    fn test_future_deadline_is_not_due() {
        let mut queue = TimerQueue::new();
        queue.schedule(Timer::Spawn, HOUR);

        assert!(queue.pop_due(Instant::now()).is_none());
        assert!(queue.next_deadline().is_some());
    }

    #[test]
    fn test_pop_due_returns_earliest_first() {
        let mut queue = TimerQueue::new();
        queue.schedule(Timer::Spawn, HOUR);
        queue.schedule(Timer::Tick, Duration::ZERO);

        let far_future = Instant::now() + HOUR + HOUR;
        assert_eq!(queue.pop_due(far_future), Some(Timer::Tick));
        assert_eq!(queue.pop_due(far_future), Some(Timer::Spawn));
        assert!(queue.pop_due(far_future).is_none());
    }

    #[test]
    fn test_next_deadline_is_minimum() {
        let mut queue = TimerQueue::new();
        queue.schedule(Timer::Spawn, HOUR);
        queue.schedule(Timer::Tick, Duration::ZERO);

        let deadline = queue.next_deadline().unwrap();
        assert!(deadline <= Instant::now());
    }
}
