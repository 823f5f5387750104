// SPDX-License-Identifier: MPL-2.0
//! Ordered queue of visible toasts with timed removal.
//!
//! The queue is an owned value: hosts create one, hand references to their
//! UI components, and route timer expirations back into it. Toasts are kept
//! oldest first.
//!
//! # Example
//!
//! ```
//! use iced_toasts::queue::{ManualScheduler, ToastQueue};
//! use iced_toasts::toast::Toast;
//! use std::time::Duration;
//!
//! let mut queue = ToastQueue::new(ManualScheduler::new());
//! queue.push(Toast::success("Saved"));
//! assert_eq!(queue.len(), 1);
//!
//! queue.advance(Duration::from_millis(2500));
//! assert!(queue.is_empty());
//! ```

mod manual;
mod runtime;
mod scheduler;

pub use manual::{ManualHandle, ManualScheduler};
pub use runtime::{Expirations, TokioScheduler};
pub use scheduler::{Scheduler, TimerHandle};

use crate::config::{ToastsConfig, DEFAULT_TOAST_DURATION_MS};
use crate::toast::{Alert, Toast, ToastId};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// A toast currently held by a queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    id: ToastId,
    toast: Toast,
    delay: Duration,
}

impl ActiveToast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn content(&self) -> &str {
        self.toast.content()
    }

    #[must_use]
    pub fn alert(&self) -> Alert {
        self.toast.alert()
    }

    /// Delay the expiry timer was armed with.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Ordered sequence of visible toasts, oldest first.
pub struct ToastQueue<S: Scheduler> {
    entries: Vec<ActiveToast>,
    timers: HashMap<ToastId, S::Handle>,
    scheduler: S,
    next_id: u64,
    default_duration: Duration,
}

impl<S: Scheduler> fmt::Debug for ToastQueue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("entries", &self.entries)
            .field("pending_timers", &self.timers.len())
            .field("next_id", &self.next_id)
            .field("default_duration", &self.default_duration)
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler> ToastQueue<S> {
    /// Creates an empty queue with the 2500 ms default duration.
    pub fn new(scheduler: S) -> Self {
        Self::with_default_duration(scheduler, Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }

    /// Creates an empty queue whose toasts default to `default_duration`.
    pub fn with_default_duration(scheduler: S, default_duration: Duration) -> Self {
        Self {
            entries: Vec::new(),
            timers: HashMap::new(),
            scheduler,
            next_id: 0,
            default_duration,
        }
    }

    /// Creates an empty queue configured from the `[toasts]` section.
    pub fn from_config(scheduler: S, config: &ToastsConfig) -> Self {
        Self::with_default_duration(scheduler, config.default_duration())
    }

    /// Appends a toast and arms its expiry timer.
    ///
    /// The id comes from a per-queue counter and is never reused, so a late
    /// timer can only ever remove the toast it was armed for.
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = ToastId::new(self.next_id);
        self.next_id += 1;

        let delay = toast.duration().unwrap_or(self.default_duration);
        tracing::debug!(%id, alert = %toast.alert(), ?delay, "toast pushed");

        self.entries.push(ActiveToast { id, toast, delay });
        let handle = self.scheduler.schedule(id, delay);
        self.timers.insert(id, handle);
        id
    }

    /// Removes the toast whose timer fired.
    ///
    /// Unknown ids are ignored: the toast was already dismissed or the timer
    /// fired twice.
    pub fn expire(&mut self, id: ToastId) -> Option<ActiveToast> {
        // The timer already fired, so the handle is dropped without cancelling.
        self.timers.remove(&id);
        let removed = self.remove_entry(id);
        match &removed {
            Some(_) => tracing::debug!(%id, "toast expired"),
            None => tracing::debug!(%id, "expired toast no longer queued"),
        }
        removed
    }

    /// Removes a toast before its timer fires and cancels the timer.
    pub fn dismiss(&mut self, id: ToastId) -> Option<ActiveToast> {
        if let Some(handle) = self.timers.remove(&id) {
            handle.cancel();
        }
        let removed = self.remove_entry(id);
        if removed.is_some() {
            tracing::debug!(%id, "toast dismissed");
        }
        removed
    }

    /// Removes every toast and cancels every pending timer.
    pub fn clear(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.cancel();
        }
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "toasts cleared");
        }
        self.entries.clear();
    }

    fn remove_entry(&mut self, id: ToastId) -> Option<ActiveToast> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position))
    }

    /// Visible toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveToast> {
        self.entries.iter()
    }

    /// Ids of the visible toasts, oldest first.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.entries.iter().map(ActiveToast::id).collect()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ActiveToast> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of timer handles still retained.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Changes the default for toasts pushed from now on.
    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
