// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of
//! application state it may mutate, applies the state change, and returns
//! the follow-up task (usually a slide decode, or nothing).

use super::{Message, Screen};
use crate::config::{self, SortOrder};
use crate::error::Error;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::carousel_view;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use crate::ui::toggle_bar;
use iced::keyboard;
use iced::Task;
use std::path::PathBuf;

/// Mutable view over the application state shared by all handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub gallery: &'a mut Gallery,
    pub theme_mode: &'a mut ThemeMode,
    pub sort_order: &'a mut SortOrder,
    pub show_indicators: &'a mut bool,
    pub slide_height: f32,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles a control press on the carousel at `index` in the active section.
///
/// Interacting with any control also moves keyboard focus to that carousel.
pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    message: carousel_view::Message,
) -> Task<Message> {
    ctx.gallery.focus_carousel(index);

    let Some(section) = ctx.gallery.active_section_index() else {
        return Task::none();
    };
    let Some(carousel) = ctx.gallery.carousel_mut(index) else {
        return Task::none();
    };

    match message {
        carousel_view::Message::Previous => carousel.previous(),
        carousel_view::Message::Next => carousel.next(),
        carousel_view::Message::SelectSlide(slide) => carousel.go_to(slide),
    }

    match carousel.pending_load() {
        Some((slide, path)) => load_slide_task(section, index, slide, path),
        None => Task::none(),
    }
}

/// Handles a toggle button press: activates the target section and starts
/// decoding the current slide of each of its rolls.
pub fn handle_toggle_message(
    ctx: &mut UpdateContext<'_>,
    message: toggle_bar::Message,
) -> Task<Message> {
    match message {
        toggle_bar::Message::Activate(section_id) => {
            ctx.gallery.activate_section(&section_id);
            load_active_section_slides(ctx.gallery)
        }
    }
}

/// Handles navbar presses by switching screens.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::OpenSettings => *ctx.screen = Screen::Settings,
        navbar::Message::OpenAbout => *ctx.screen = Screen::About,
        navbar::Message::Back => *ctx.screen = Screen::Gallery,
    }
    Task::none()
}

/// Handles settings changes. Every change applies immediately and is
/// persisted to `settings.toml`.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
        }
        settings::Message::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
        }
        settings::Message::SortOrderSelected(order) => {
            // Slide order is fixed at construction; the new order applies to
            // the next launch.
            *ctx.sort_order = order;
        }
        settings::Message::IndicatorsToggled(enabled) => {
            *ctx.show_indicators = enabled;
        }
    }
    persist_preferences(ctx);
    Task::none()
}

/// Handles raw keyboard events on the gallery screen.
///
/// Left/right arrows navigate the focused carousel, mirroring its
/// previous/next buttons.
pub fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: iced::Event) -> Task<Message> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return Task::none();
    };

    let focused = ctx.gallery.focused();
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            handle_carousel_message(ctx, focused, carousel_view::Message::Previous)
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            handle_carousel_message(ctx, focused, carousel_view::Message::Next)
        }
        _ => Task::none(),
    }
}

/// Stores a decoded slide image, or reports the failure.
pub fn handle_slide_loaded(
    ctx: &mut UpdateContext<'_>,
    section: usize,
    carousel: usize,
    slide: usize,
    result: Result<media::ImageData, Error>,
) -> Task<Message> {
    let Some(target) = ctx.gallery.carousel_in_section_mut(section, carousel) else {
        return Task::none();
    };

    match result {
        Ok(image) => target.set_image(slide, image),
        Err(_) => {
            let filename = target
                .slides()
                .nth(slide)
                .and_then(|s| s.path().file_name())
                .and_then(|name| name.to_str())
                .unwrap_or("?")
                .to_string();
            ctx.notifications.push(
                Notification::error("notification-slide-load-error").with_arg("filename", filename),
            );
        }
    }
    Task::none()
}

/// Starts decoding the current slide of every roll in the active section
/// that has not been decoded yet.
pub fn load_active_section_slides(gallery: &Gallery) -> Task<Message> {
    let Some(section) = gallery.active_section_index() else {
        return Task::none();
    };

    let pending: Vec<(usize, usize, PathBuf)> = gallery
        .active_section()
        .map(|s| {
            s.carousels
                .iter()
                .enumerate()
                .filter_map(|(index, carousel)| {
                    carousel
                        .pending_load()
                        .map(|(slide, path)| (index, slide, path))
                })
                .collect()
        })
        .unwrap_or_default();

    Task::batch(
        pending
            .into_iter()
            .map(|(index, slide, path)| load_slide_task(section, index, slide, path)),
    )
}

/// Decodes one slide image off the UI thread.
fn load_slide_task(section: usize, carousel: usize, slide: usize, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move { media::load_image(&path) },
        move |result| Message::SlideLoaded {
            section,
            carousel,
            slide,
            result,
        },
    )
}

/// Writes the current preferences back to `settings.toml`.
fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    let config = config::Config {
        general: config::GeneralConfig {
            language: Some(ctx.i18n.current_locale().to_string()),
            theme_mode: *ctx.theme_mode,
        },
        display: config::DisplayConfig {
            slide_height: Some(ctx.slide_height),
            show_indicators: Some(*ctx.show_indicators),
            sort_order: Some(*ctx.sort_order),
        },
    };

    if config::save(&config).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
