// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management for an iced application.
//!
//! The `Manager` owns the toast queue, turns expiry timers into tasks and
//! applies expiry and dismiss messages coming back from the runtime.

use super::scheduler::TaskScheduler;
use crate::config::ToastsConfig;
use crate::queue::{ActiveToast, ToastQueue};
use crate::toast::{Toast, ToastId};
use iced::Task;

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The expiry timer of a toast fired.
    Expired(ToastId),
    /// The user closed a toast.
    Dismiss(ToastId),
}

/// Owns the visible toasts of an application.
#[derive(Debug)]
pub struct Manager {
    queue: ToastQueue<TaskScheduler>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(&ToastsConfig::default())
    }
}

impl Manager {
    /// Creates an empty manager using the `[toasts]` settings.
    #[must_use]
    pub fn new(config: &ToastsConfig) -> Self {
        Self {
            queue: ToastQueue::from_config(TaskScheduler::new(), config),
        }
    }

    /// Shows a toast and returns the task that will expire it.
    ///
    /// The returned task must be handed back to the iced runtime, otherwise
    /// the toast stays until dismissed.
    pub fn push(&mut self, toast: Toast) -> Task<Message> {
        self.queue.push(toast);
        self.armed_timers()
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: &Message) {
        match message {
            Message::Expired(id) => {
                self.queue.expire(*id);
            }
            Message::Dismiss(id) => {
                self.queue.dismiss(*id);
            }
        }
    }

    /// Removes every toast and cancels their timers.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    fn armed_timers(&mut self) -> Task<Message> {
        self.queue
            .scheduler_mut()
            .take_tasks()
            .map(Message::Expired)
    }

    /// Returns the visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &ActiveToast> {
        self.queue.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.queue.is_empty()
    }

    #[must_use]
    pub fn queue(&self) -> &ToastQueue<TaskScheduler> {
        &self.queue
    }
}
