// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::about;
use crate::ui::carousel_view;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::toggle_bar;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A control of the carousel at `index` (within the active section)
    /// was pressed.
    Carousel {
        index: usize,
        message: carousel_view::Message,
    },
    Toggle(toggle_bar::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// Result of decoding a slide image off the UI thread.
    SlideLoaded {
        section: usize,
        carousel: usize,
        slide: usize,
        result: Result<ImageData, Error>,
    },
    /// Raw host event (keyboard navigation on the gallery screen).
    RawEvent(iced::Event),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery root directory to open on startup.
    pub gallery_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
