// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, plus the toast overlay stacked on top.

use super::{Message, Screen};
use crate::config::SortOrder;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::carousel_view;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use crate::ui::toggle_bar;
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: &'a Gallery,
    pub theme_mode: ThemeMode,
    pub sort_order: SortOrder,
    pub show_indicators: bool,
    pub slide_height: f32,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        gallery_title: ctx.gallery.title(),
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => view_gallery(&ctx),
        Screen::Settings => view_settings(&ctx),
        Screen::About => about::view(ctx.i18n).map(Message::About),
    };

    let content = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    // Toast notifications float above whatever screen is showing.
    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(content).push(overlay).into()
}

/// The gallery screen: toggle bar plus the active section's carousels.
fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.gallery.sections().is_empty() {
        return view_hint(ctx.i18n.tr("gallery-no-sections"));
    }

    let toggle = toggle_bar::view(ctx.gallery.toggle()).map(Message::Toggle);

    let body: Element<'a, Message> = match ctx.gallery.active_section() {
        Some(section) => {
            let mut carousels = Column::new().spacing(spacing::LG).padding(spacing::MD);

            for (index, carousel) in section.carousels.iter().enumerate() {
                let element = carousel_view::view(
                    carousel_view::ViewContext {
                        i18n: ctx.i18n,
                        slide_height: ctx.slide_height,
                        show_indicators: ctx.show_indicators,
                        focused: index == ctx.gallery.focused(),
                    },
                    carousel,
                )
                .map(move |message| Message::Carousel { index, message });
                carousels = carousels.push(element);
            }

            scrollable(carousels)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => view_hint(ctx.i18n.tr("gallery-choose-section")),
    };

    Column::new()
        .push(toggle)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Centered hint text for the empty states (no sections, nothing toggled).
fn view_hint<'a>(message: String) -> Element<'a, Message> {
    Container::new(
        Text::new(message)
            .size(typography::TITLE_MD)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn view_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    settings::view(settings::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        sort_order: ctx.sort_order,
        show_indicators: ctx.show_indicators,
    })
    .map(Message::Settings)
}
