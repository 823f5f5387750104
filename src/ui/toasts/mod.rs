// SPDX-License-Identifier: MPL-2.0
//! Toast overlay for iced applications.
//!
//! Toasts appear temporarily to inform users about actions (save success,
//! errors, etc.) without blocking interaction, and disappear on their own.
//!
//! # Components
//!
//! - [`scheduler`] - `TaskScheduler`, expiry timers as iced tasks
//! - [`manager`] - `Manager` owning the queue inside an application
//! - [`toast`] - Toast widget rendering the visible entries
//!
//! # Usage
//!
//! ```ignore
//! use crate::toast::Toast;
//! use crate::ui::toasts::{Manager, ToastWidget};
//!
//! let mut manager = Manager::default();
//!
//! // In `update`, return the expiry task to the runtime
//! return manager.push(Toast::success("Saved")).map(Message::Toasts);
//!
//! // In `view`, stack the overlay above the content
//! let overlay = ToastWidget::view_overlay(&manager, &config.display).map(Message::Toasts);
//! ```

pub mod manager;
pub mod scheduler;
pub mod toast;

pub use manager::{Manager, Message};
pub use scheduler::TaskScheduler;
pub use toast::{accent_color, Toast as ToastWidget};
