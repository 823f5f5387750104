// SPDX-License-Identifier: MPL-2.0
//! Virtual-clock scheduler.
//!
//! Time only moves when [`ManualScheduler::advance`] is called, which makes
//! expiry deterministic for tests and for hosts that drive their own frame
//! clock.

use super::{ActiveToast, Scheduler, TimerHandle, ToastQueue};
use crate::toast::ToastId;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug)]
struct ManualTimer {
    deadline: Duration,
    seq: u64,
    id: ToastId,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler driven by an explicit clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    timers: Vec<ManualTimer>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that are armed and not cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.iter().filter(|t| !t.cancelled.get()).count()
    }

    /// Moves the clock forward and returns the ids whose timers fired, ordered
    /// by deadline then by scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<ToastId> {
        self.now = self.now.saturating_add(by);
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .filter(|t| !t.cancelled.get())
            .partition(|t| t.deadline <= now);
        self.timers = pending;

        due.sort_by_key(|t| (t.deadline, t.seq));
        due.into_iter().map(|t| t.id).collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&mut self, id: ToastId, delay: Duration) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.push(ManualTimer {
            deadline: self.now.saturating_add(delay),
            seq: self.next_seq,
            id,
            cancelled: Rc::clone(&cancelled),
        });
        self.next_seq += 1;
        ManualHandle { cancelled }
    }
}

/// Handle to a timer armed on a [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        self.cancelled.set(true);
    }
}

impl ToastQueue<ManualScheduler> {
    /// Advances the virtual clock and expires every toast that came due.
    ///
    /// Returns the removed toasts in expiry order.
    pub fn advance(&mut self, by: Duration) -> Vec<ActiveToast> {
        let due = self.scheduler_mut().advance(by);
        due.into_iter().filter_map(|id| self.expire(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_returns_due_ids_by_deadline() {
        let mut scheduler = ManualScheduler::new();
        let _late = scheduler.schedule(ToastId::new(0), Duration::from_millis(300));
        let _early = scheduler.schedule(ToastId::new(1), Duration::from_millis(100));

        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(
            scheduler.advance(Duration::from_millis(250)),
            vec![ToastId::new(1), ToastId::new(0)]
        );
        assert_eq!(scheduler.now(), Duration::from_millis(349));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(ToastId::new(0), Duration::from_millis(10));
        handle.cancel();

        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn dropping_handle_keeps_timer_armed() {
        let mut scheduler = ManualScheduler::new();
        drop(scheduler.schedule(ToastId::new(4), Duration::from_millis(10)));

        assert_eq!(scheduler.advance(Duration::from_millis(10)), vec![ToastId::new(4)]);
    }

    #[test]
    fn deadlines_are_relative_to_schedule_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_millis(1000));
        let _handle = scheduler.schedule(ToastId::new(2), Duration::from_millis(500));

        assert!(scheduler.advance(Duration::from_millis(499)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![ToastId::new(2)]);
    }
}
