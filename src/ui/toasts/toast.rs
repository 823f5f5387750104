// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering queued toasts.
//!
//! Toasts appear as small cards with an alert-colored border, an alert glyph
//! and a dismiss button.

use super::manager::{Manager, Message};
use crate::config::{DisplayConfig, ToastPosition};
use crate::queue::ActiveToast;
use crate::toast::Alert;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(entry: &ActiveToast, width: f32) -> Element<'_, Message> {
        let accent_color = accent_color(entry.alert());

        let glyph = Text::new(alert_glyph(entry.alert()))
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget =
            Text::new(entry.content())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(entry.id()))
            .padding([0.0, spacing::XXS])
            .style(dismiss_button_style);

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).width(Length::Fixed(sizing::ICON_MD)))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every visible toast, stacked oldest first in the configured corner.
    pub fn view_overlay<'a>(manager: &'a Manager, display: &DisplayConfig) -> Element<'a, Message> {
        let width = display.toast_width();
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|entry| Self::view(entry, width))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (horizontal, vertical) = anchor(display.position.unwrap_or_default());
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }
}

/// Border and glyph color for an alert level.
#[must_use]
pub fn accent_color(alert: Alert) -> Color {
    match alert {
        Alert::None => palette::GRAY_500,
        Alert::Success => palette::SUCCESS_500,
        Alert::Info => palette::INFO_500,
        Alert::Warning => palette::WARNING_500,
        Alert::Error => palette::ERROR_500,
    }
}

fn alert_glyph(alert: Alert) -> &'static str {
    match alert {
        Alert::None => "•",
        Alert::Success => "✓",
        Alert::Info => "i",
        Alert::Warning => "!",
        Alert::Error => "✕",
    }
}

fn anchor(position: ToastPosition) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        ToastPosition::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        ToastPosition::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        ToastPosition::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        ToastPosition::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: if status == button::Status::Hovered {
                hover_background(opacity::OVERLAY_SUBTLE)
            } else {
                hover_background(opacity::OVERLAY_MEDIUM)
            },
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
