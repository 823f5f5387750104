// SPDX-License-Identifier: MPL-2.0
//! Toast values as supplied by callers.
//!
//! A [`Toast`] only describes what to show and for how long. Identity is
//! assigned by the queue when the toast is pushed, see
//! [`ToastQueue::push`](crate::queue::ToastQueue::push).

mod alert;

pub use alert::Alert;

use std::fmt;
use std::time::Duration;

/// Identifier assigned to a toast when it enters a queue.
///
/// Ids are unique within the queue that issued them for the queue's whole
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A short-lived notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    content: String,
    alert: Alert,
    duration: Option<Duration>,
}

impl Toast {
    /// Creates a toast that uses the queue's default duration.
    pub fn new(alert: Alert, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            alert,
            duration: None,
        }
    }

    /// Creates a toast without severity styling.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(Alert::None, content)
    }

    /// Creates a success toast.
    pub fn success(content: impl Into<String>) -> Self {
        Self::new(Alert::Success, content)
    }

    /// Creates an info toast.
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(Alert::Info, content)
    }

    /// Creates a warning toast.
    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(Alert::Warning, content)
    }

    /// Creates an error toast.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Alert::Error, content)
    }

    /// Sets how long the toast stays visible.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Same as [`Toast::with_duration`], in milliseconds.
    #[must_use]
    pub fn with_duration_ms(self, millis: u64) -> Self {
        self.with_duration(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn alert(&self) -> Alert {
        self.alert
    }

    /// Caller-requested duration, `None` when the queue default applies.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_alert() {
        assert_eq!(Toast::plain("").alert(), Alert::None);
        assert_eq!(Toast::success("").alert(), Alert::Success);
        assert_eq!(Toast::info("").alert(), Alert::Info);
        assert_eq!(Toast::warning("").alert(), Alert::Warning);
        assert_eq!(Toast::error("").alert(), Alert::Error);
    }

    #[test]
    fn duration_is_unset_by_default() {
        assert!(Toast::success("Saved").duration().is_none());
    }

    #[test]
    fn with_duration_ms_sets_duration() {
        let toast = Toast::info("Syncing").with_duration_ms(5000);
        assert_eq!(toast.duration(), Some(Duration::from_secs(5)));
        assert_eq!(toast.content(), "Syncing");
    }

    #[test]
    fn toast_id_displays_with_hash_prefix() {
        assert_eq!(ToastId::new(7).to_string(), "#7");
    }
}
