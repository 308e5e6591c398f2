// SPDX-License-Identifier: MPL-2.0
//! About screen with application name, description, and version.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Length,
};

/// Messages emitted by the about screen. The screen is purely
/// informational, so there are none; navigation happens in the navbar.
#[derive(Debug, Clone)]
pub enum Message {}

/// Renders the about screen.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("about-title")).size(typography::TITLE_LG);

    let description = Text::new(i18n.tr("about-description")).size(typography::BODY);

    let version = Text::new(i18n.tr_with_args(
        "about-version",
        &[("version", env!("CARGO_PKG_VERSION"))],
    ))
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(description)
        .push(version);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
