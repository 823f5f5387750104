// SPDX-License-Identifier: MPL-2.0
//! Expiry timers expressed as iced tasks.
//!
//! Iced side effects have to be returned from `update`, so the scheduler only
//! builds abortable [`Task`]s and keeps them until the owner collects them
//! with [`TaskScheduler::take_tasks`].

use crate::queue::{Scheduler, TimerHandle};
use crate::toast::ToastId;
use iced::task::{self, Task};
use std::fmt;
use std::time::Duration;

/// Scheduler producing one sleeping [`Task`] per toast.
#[derive(Default)]
pub struct TaskScheduler {
    armed: Vec<Task<ToastId>>,
}

impl fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("armed", &self.armed.len())
            .finish()
    }
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timer tasks built but not yet handed to the runtime.
    #[must_use]
    pub fn armed(&self) -> usize {
        self.armed.len()
    }

    /// Hands every armed timer over as one batched task.
    pub fn take_tasks(&mut self) -> Task<ToastId> {
        Task::batch(std::mem::take(&mut self.armed))
    }
}

impl Scheduler for TaskScheduler {
    type Handle = task::Handle;

    fn schedule(&mut self, id: ToastId, delay: Duration) -> task::Handle {
        // The sleep is created inside the future so it binds to the runtime
        // that eventually polls it.
        let (timer, handle) =
            Task::perform(async move { tokio::time::sleep(delay).await }, move |()| id)
                .abortable();
        self.armed.push(timer);
        handle
    }
}

impl TimerHandle for task::Handle {
    fn cancel(self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_arms_one_task_per_toast() {
        let mut scheduler = TaskScheduler::new();
        let _a = scheduler.schedule(ToastId::new(0), Duration::from_millis(100));
        let _b = scheduler.schedule(ToastId::new(1), Duration::from_millis(200));
        assert_eq!(scheduler.armed(), 2);
    }

    #[test]
    fn take_tasks_drains_armed_timers() {
        let mut scheduler = TaskScheduler::new();
        let _handle = scheduler.schedule(ToastId::new(0), Duration::from_millis(100));

        let _batch = scheduler.take_tasks();
        assert_eq!(scheduler.armed(), 0);
    }
}
