// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is an ephemeral notification (toast) queue with an iced
//! overlay.
//!
//! Callers push a short message with an alert level; the queue keeps it
//! visible and removes it once its timer fires. Timers come from a pluggable
//! [`queue::Scheduler`]: a virtual clock, a tokio runtime, or iced tasks.

pub mod app;
pub mod config;
pub mod error;
pub mod queue;
pub mod toast;
pub mod ui;
