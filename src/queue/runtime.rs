// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed scheduler for headless hosts.
//!
//! Every timer is a sleeping task on the runtime. When it wakes, the toast id
//! is sent over a channel; the host owns the receiving end ([`Expirations`])
//! and feeds ids back into its queue, so the queue itself is only ever
//! touched from the host's loop.

use super::{ActiveToast, Scheduler, TimerHandle, ToastQueue};
use crate::error::{Error, Result};
use crate::toast::ToastId;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Scheduler spawning one sleeping task per toast.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
    sender: mpsc::UnboundedSender<ToastId>,
}

/// Receiving end of a [`TokioScheduler`]: ids whose timers fired.
#[derive(Debug)]
pub struct Expirations {
    receiver: mpsc::UnboundedReceiver<ToastId>,
}

impl TokioScheduler {
    /// Creates a scheduler spawning its timers on `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> (Self, Expirations) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { runtime, sender }, Expirations { receiver })
    }

    /// Creates a scheduler on the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime.
    pub fn current() -> Result<(Self, Expirations)> {
        let runtime = Handle::try_current().map_err(|err| Error::Runtime(err.to_string()))?;
        Ok(Self::new(runtime))
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule(&mut self, id: ToastId, delay: Duration) -> AbortHandle {
        let sender = self.sender.clone();
        self.runtime
            .spawn(async move {
                tokio::time::sleep(delay).await;
                // A closed channel means the host is gone; nothing to remove.
                let _ = sender.send(id);
            })
            .abort_handle()
    }
}

impl TimerHandle for AbortHandle {
    fn cancel(self) {
        self.abort();
    }
}

impl Expirations {
    /// Waits for the next fired timer.
    pub async fn recv(&mut self) -> Option<ToastId> {
        self.receiver.recv().await
    }

    /// Returns a fired timer without waiting, if any.
    pub fn try_recv(&mut self) -> Option<ToastId> {
        self.receiver.try_recv().ok()
    }
}

impl ToastQueue<TokioScheduler> {
    /// Waits until a queued toast expires and removes it.
    ///
    /// Ids of toasts that were dismissed in the meantime are skipped. Returns
    /// `None` right away when the queue is empty, since no timer is pending.
    pub async fn expire_next(&mut self, expirations: &mut Expirations) -> Option<ActiveToast> {
        while !self.is_empty() {
            let id = expirations.recv().await?;
            if let Some(expired) = self.expire(id) {
                return Some(expired);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_outside_runtime_is_an_error() {
        let err = TokioScheduler::current().unwrap_err();
        assert!(matches!(err, Error::Runtime(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_reports_id_after_delay() {
        let (mut scheduler, mut expirations) = TokioScheduler::current().unwrap();
        let start = tokio::time::Instant::now();

        let _handle = scheduler.schedule(ToastId::new(3), Duration::from_millis(750));
        assert_eq!(expirations.recv().await, Some(ToastId::new(3)));
        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_reports() {
        let (mut scheduler, mut expirations) = TokioScheduler::current().unwrap();

        scheduler
            .schedule(ToastId::new(0), Duration::from_millis(100))
            .cancel();
        let outcome = tokio::time::timeout(Duration::from_secs(1), expirations.recv()).await;
        assert!(outcome.is_err(), "cancelled timer should not fire");
    }
}
