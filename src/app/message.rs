// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::toast::Alert;
use crate::ui::toasts;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The toast text input changed.
    DraftChanged(String),
    /// The duration input (milliseconds) changed.
    DurationChanged(String),
    /// Push the drafted toast with the given alert level.
    Push(Alert),
    /// Remove every visible toast.
    ClearToasts,
    Toasts(toasts::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Toast shown right after startup.
    pub message: Option<String>,
    /// Alert level of the startup toast (defaults to info).
    pub alert: Option<Alert>,
    /// Duration of the startup toast in milliseconds.
    pub duration_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
