// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme mode, slide ordering, and indicator
//! visibility. Every change is applied immediately and persisted by the
//! update loop.

use crate::config::SortOrder;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, checkbox, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub sort_order: SortOrder,
    pub show_indicators: bool,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    SortOrderSelected(SortOrder),
    IndicatorsToggled(bool),
}

/// Renders the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Shrink)
        .push(title)
        .push(view_language_group(&ctx))
        .push(view_theme_group(&ctx))
        .push(view_sort_group(&ctx))
        .push(
            checkbox(ctx.show_indicators)
                .label(ctx.i18n.tr("settings-indicators-toggle"))
                .on_toggle(Message::IndicatorsToggled),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

/// Language choice buttons, one per available locale.
fn view_language_group<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("settings-language-label")).size(typography::TITLE_SM);

    let mut row = Row::new().spacing(spacing::SM);
    for locale in &ctx.i18n.available_locales {
        // Prefer the translated language name ("English (en-US)"); fall back
        // to the raw locale code when no translation exists.
        let name_key = format!("language-name-{}", locale);
        let translated = ctx.i18n.tr(&name_key);
        let text = if translated.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{} ({})", translated, locale)
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let style = choice_style(is_current);

        row = row.push(
            button(Text::new(text))
                .style(style)
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    Column::new().spacing(spacing::XS).push(label).push(row).into()
}

/// Light / dark / system theme buttons.
fn view_theme_group<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::TITLE_SM);

    let modes = [
        (ThemeMode::Light, "theme-mode-light"),
        (ThemeMode::Dark, "theme-mode-dark"),
        (ThemeMode::System, "theme-mode-system"),
    ];

    let mut row = Row::new().spacing(spacing::SM);
    for (mode, key) in modes {
        let style = choice_style(ctx.theme_mode == mode);
        row = row.push(
            button(Text::new(ctx.i18n.tr(key)))
                .style(style)
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    Column::new().spacing(spacing::XS).push(label).push(row).into()
}

/// Slide sort order buttons.
fn view_sort_group<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("settings-sort-label")).size(typography::TITLE_SM);

    let orders = [
        (SortOrder::Alphabetical, "sort-alphabetical"),
        (SortOrder::ModifiedDate, "sort-modified-date"),
        (SortOrder::CreatedDate, "sort-created-date"),
    ];

    let mut row = Row::new().spacing(spacing::SM);
    for (order, key) in orders {
        let style = choice_style(ctx.sort_order == order);
        row = row.push(
            button(Text::new(ctx.i18n.tr(key)))
                .style(style)
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::SortOrderSelected(order)),
        );
    }

    Column::new().spacing(spacing::XS).push(label).push(row).into()
}

/// Selected/unselected style for a choice button.
fn choice_style(active: bool) -> fn(&iced::Theme, button::Status) -> button::Style {
    if active {
        styles::button::selected
    } else {
        styles::button::unselected
    }
}
