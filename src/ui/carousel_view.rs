// SPDX-License-Identifier: MPL-2.0
//! Carousel widget: one film roll with its navigation controls.
//!
//! Renders the current slide, semi-transparent previous/next overlay
//! buttons on either side, and one indicator dot per slide below. The
//! active state of slides and indicators is derived from the carousel
//! index on every render; nothing is stored in the widgets themselves.

use crate::config;
use crate::gallery::Carousel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Contextual data needed to render one carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Rendered slide height in logical pixels.
    pub slide_height: f32,
    /// Whether the indicator dots are shown.
    pub show_indicators: bool,
    /// Whether this carousel currently receives keyboard navigation.
    pub focused: bool,
}

/// Messages emitted by a carousel's controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// Previous-button press.
    Previous,
    /// Next-button press.
    Next,
    /// Indicator press: jump directly to this slide.
    SelectSlide(usize),
}

/// Renders a single carousel.
pub fn view<'a>(ctx: ViewContext<'a>, carousel: &'a Carousel) -> Element<'a, Message> {
    let header = view_header(&ctx, carousel);

    let body: Element<'a, Message> = if carousel.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("gallery-empty-roll"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fixed(ctx.slide_height / 2.0))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        view_slide_row(&ctx, carousel)
    };

    let mut column = Column::new().spacing(spacing::XS).push(header).push(body);

    if ctx.show_indicators && !carousel.is_empty() {
        column = column.push(view_indicators(carousel));
    }

    let focused = ctx.focused;
    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| frame_style(theme, focused))
        .into()
}

/// Roll name and slide counter.
fn view_header<'a>(ctx: &ViewContext<'a>, carousel: &'a Carousel) -> Element<'a, Message> {
    let name = Text::new(carousel.name().to_string()).size(typography::TITLE_SM);

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(name);

    if let Some(index) = carousel.current_index() {
        let position = ctx.i18n.tr_with_args(
            "carousel-position",
            &[
                ("current", &(index + 1).to_string()),
                ("total", &carousel.len().to_string()),
            ],
        );
        header = header.push(
            Text::new(position)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    header.into()
}

/// Current slide flanked by the previous/next overlay buttons.
fn view_slide_row<'a>(ctx: &ViewContext<'a>, carousel: &'a Carousel) -> Element<'a, Message> {
    let slide: Element<'a, Message> = match carousel.current_slide().and_then(|s| s.image()) {
        Some(image) => iced::widget::image(image.handle.clone())
            .height(Length::Fixed(ctx.slide_height))
            .into(),
        None => Text::new(ctx.i18n.tr("slide-loading"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    };

    let slide_area = Container::new(slide)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.slide_height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let previous_button = button(Text::new("‹").size(typography::TITLE_LG))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Previous);

    let next_button = button(Text::new("›").size(typography::TITLE_LG))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Next);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous_button)
        .push(slide_area)
        .push(next_button)
        .into()
}

/// One dot per slide; the current slide's dot is highlighted.
fn view_indicators(carousel: &Carousel) -> Element<'_, Message> {
    let mut row = Row::new().spacing(config::INDICATOR_SPACING);

    for index in 0..carousel.len() {
        let active = carousel.is_current(index);
        let dot = button(Text::new(""))
            .width(Length::Fixed(config::INDICATOR_SIZE))
            .height(Length::Fixed(config::INDICATOR_SIZE))
            .style(move |theme: &Theme, status| indicator_style(theme, status, active))
            .on_press(Message::SelectSlide(index));
        row = row.push(dot);
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Frame around the whole carousel; the focused roll gets an accent border.
fn frame_style(theme: &Theme, focused: bool) -> iced::widget::container::Style {
    let mut style = styles::container::panel(theme);
    if focused {
        style.border = Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        };
    }
    style
}

/// Style for an indicator dot.
fn indicator_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let inactive_color = if is_light {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };

    let background = if active {
        palette::PRIMARY_500
    } else if matches!(status, button::Status::Hovered) {
        palette::PRIMARY_400
    } else {
        inactive_color
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}
