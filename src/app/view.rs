// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::config::DisplayConfig;
use crate::toast::Alert;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toasts::{self, ToastWidget};
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub draft: &'a str,
    pub duration_input: &'a str,
    pub default_duration_ms: u128,
    pub toasts: &'a toasts::Manager,
    pub display: &'a DisplayConfig,
}

/// Renders the composer with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("Toasts").size(typography::TITLE_MD);

    let draft_input = text_input("Message", ctx.draft)
        .on_input(Message::DraftChanged)
        .size(typography::BODY_LG)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let duration_placeholder = format!("Duration in ms (default {})", ctx.default_duration_ms);
    let duration_input = text_input(&duration_placeholder, ctx.duration_input)
        .on_input(Message::DurationChanged)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let alert_buttons = Alert::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, alert| {
            row.push(
                button(Text::new(alert.as_str()).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press(Message::Push(alert)),
            )
        },
    );

    let status = Text::new(format!("{} visible", ctx.toasts.visible_count()))
        .size(typography::CAPTION);

    let clear_button = button(Text::new("Clear").size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe(ctx.toasts.has_toasts().then_some(Message::ClearToasts));

    let composer = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(draft_input)
        .push(duration_input)
        .push(alert_buttons)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(status)
                .push(clear_button),
        );

    let content = Container::new(composer)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    let overlay = ToastWidget::view_overlay(ctx.toasts, ctx.display).map(Message::Toasts);

    Stack::new()
        .push(content)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
