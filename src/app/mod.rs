// SPDX-License-Identifier: MPL-2.0
//! Application root state for the toast demo window.
//!
//! The `App` struct wires the toast manager to a small composer: a text
//! input, a duration input and one button per alert level. Toasts can also
//! be pushed once at startup from the command line.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::toast::{Alert, Toast};
use crate::ui::toasts;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    config: Config,
    toasts: toasts::Manager,
    draft: String,
    duration_input: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible_toasts", &self.toasts.visible_count())
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure while flags can only be consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Parses the duration input. Empty input means "use the queue default".
pub fn parse_duration_input(input: &str) -> Result<Option<Duration>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(|millis| Some(Duration::from_millis(millis)))
        .map_err(|err| Error::Config(format!("invalid duration '{trimmed}': {err}")))
}

impl App {
    /// Loads the configuration and pushes the startup toasts, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = App {
            toasts: toasts::Manager::new(&config.toasts),
            config,
            draft: String::new(),
            duration_input: String::new(),
        };

        let mut tasks = Vec::new();
        if let Some(warning) = config_warning {
            tasks.push(app.push(Toast::warning(warning)));
        }
        if let Some(content) = flags.message {
            let mut toast = Toast::new(flags.alert.unwrap_or(Alert::Info), content);
            if let Some(millis) = flags.duration_ms {
                toast = toast.with_duration_ms(millis);
            }
            tasks.push(app.push(toast));
        }

        tracing::info!(
            default_duration = ?app.config.toasts.default_duration(),
            startup_toasts = tasks.len(),
            "application started"
        );
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        match self.toasts.visible_count() {
            0 => "Iced Toasts".to_string(),
            count => format!("Iced Toasts ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn push(&mut self, toast: Toast) -> Task<Message> {
        self.toasts.push(toast).map(Message::Toasts)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
            }
            Message::DurationChanged(input) => {
                self.duration_input = input;
            }
            Message::Push(alert) => {
                let content = if self.draft.trim().is_empty() {
                    format!("{alert} toast")
                } else {
                    self.draft.clone()
                };
                let mut toast = Toast::new(alert, content);
                match parse_duration_input(&self.duration_input) {
                    Ok(Some(duration)) => toast = toast.with_duration(duration),
                    Ok(None) => {}
                    Err(err) => {
                        tracing::debug!(%err, "rejected duration input");
                        return self.push(Toast::error(err.to_string()));
                    }
                }
                return self.push(toast);
            }
            Message::ClearToasts => {
                self.toasts.clear();
            }
            Message::Toasts(message) => {
                self.toasts.update(&message);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            draft: &self.draft,
            duration_input: &self.duration_input,
            default_duration_ms: self.config.toasts.default_duration().as_millis(),
            toasts: &self.toasts,
            display: &self.config.display,
        })
    }
}
