// SPDX-License-Identifier: MPL-2.0
//! The deferred-execution capability a host runtime lends to the queue.

use crate::toast::ToastId;
use std::time::Duration;

/// Schedules one-shot expiry timers for toasts.
///
/// A scheduler never touches the queue itself. When a timer fires, the host
/// is handed the [`ToastId`] back (as a return value, a channel message or a
/// UI message depending on the back-end) and calls
/// [`ToastQueue::expire`](super::ToastQueue::expire).
pub trait Scheduler {
    /// Handle kept by the queue for each pending timer.
    type Handle: TimerHandle;

    /// Arms a timer that reports `id` once `delay` has elapsed.
    fn schedule(&mut self, id: ToastId, delay: Duration) -> Self::Handle;
}

/// Cancellation handle for a pending timer.
///
/// Dropping a handle must not cancel the timer; only [`TimerHandle::cancel`]
/// does.
pub trait TimerHandle {
    fn cancel(self);
}
