// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, settings,
//! and about views.
//!
//! The `App` struct wires together the domains (gallery page, localization,
//! preferences) and translates messages into side effects like config
//! persistence or slide decoding. The gallery itself is assembled exactly
//! once, when the window structure is ready; afterwards every mutation
//! flows through `App::update`.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::SortOrder;
use crate::error::{Error, LayoutError};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: Gallery,
    theme_mode: ThemeMode,
    sort_order: SortOrder,
    /// Whether indicator dots are rendered below each carousel.
    show_indicators: bool,
    /// Rendered slide height in logical pixels.
    slide_height: f32,
    /// Toast notification manager for startup diagnostics and load errors.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("sections", &self.gallery.sections().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Ensures slide heights stay inside the supported range so persisted
/// configs cannot request nonsensical sizes.
fn clamp_slide_height(value: f32) -> f32 {
    value.clamp(config::MIN_SLIDE_HEIGHT, config::MAX_SLIDE_HEIGHT)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Gallery,
            gallery: Gallery::default(),
            theme_mode: ThemeMode::System,
            sort_order: SortOrder::default(),
            show_indicators: true,
            slide_height: config::DEFAULT_SLIDE_HEIGHT,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and scans the gallery root passed on
    /// the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.sort_order = config.display.sort_order.unwrap_or_default();
        app.show_indicators = config.display.show_indicators.unwrap_or(true);
        if let Some(height) = config.display.slide_height {
            app.slide_height = clamp_slide_height(height);
        }

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        // One-time bootstrap: enumerate the page's containers and build one
        // carousel controller per roll.
        let task = if let Some(path_str) = flags.gallery_path {
            let root = PathBuf::from(&path_str);
            match Gallery::from_root(&root, app.sort_order) {
                Ok((gallery, warnings)) => {
                    app.gallery = gallery;
                    for warning in &warnings {
                        app.notifications.push(layout_warning_notification(warning));
                    }
                    update::load_active_section_slides(&mut app.gallery)
                }
                Err(err) => {
                    app.notifications.push(layout_error_notification(&err));
                    Task::none()
                }
            }
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.gallery.title() {
            Some(page_title) => format!("{page_title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            theme_mode: &mut self.theme_mode,
            sort_order: &mut self.sort_order,
            show_indicators: &mut self.show_indicators,
            slide_height: self.slide_height,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Carousel { index, message } => {
                update::handle_carousel_message(&mut ctx, index, message)
            }
            Message::Toggle(toggle_message) => {
                update::handle_toggle_message(&mut ctx, toggle_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => match about_message {},
            Message::SwitchScreen(target) => {
                self.screen = target;
                Task::none()
            }
            Message::SlideLoaded {
                section,
                carousel,
                slide,
                result,
            } => update::handle_slide_loaded(&mut ctx, section, carousel, slide, result),
            Message::RawEvent(event) => update::handle_raw_event(&mut ctx, event),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick drives notification auto-dismiss.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: &self.gallery,
            theme_mode: self.theme_mode,
            sort_order: self.sort_order,
            show_indicators: self.show_indicators,
            slide_height: self.slide_height,
            notifications: &self.notifications,
        })
    }
}

/// Maps a non-fatal layout warning to a toast.
fn layout_warning_notification(warning: &LayoutError) -> Notification {
    let notification = Notification::warning(warning.i18n_key());
    match warning {
        LayoutError::DanglingSection(id) => notification.with_arg("id", id.as_str()),
        LayoutError::RootUnreadable(path) => notification.with_arg("path", path.as_str()),
        LayoutError::InvalidManifest(_) | LayoutError::NoSections => notification,
    }
}

/// Maps a fatal gallery bootstrap error to a toast.
fn layout_error_notification(err: &Error) -> Notification {
    match err {
        Error::Layout(layout_err) => {
            let notification = Notification::error(layout_err.i18n_key());
            match layout_err {
                LayoutError::DanglingSection(id) => notification.with_arg("id", id.as_str()),
                LayoutError::RootUnreadable(path) => notification.with_arg("path", path.as_str()),
                LayoutError::InvalidManifest(_) | LayoutError::NoSections => notification,
            }
        }
        _ => Notification::error("error-layout-root-unreadable").with_arg("path", "?"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use crate::ui::carousel_view;
    use crate::ui::navbar;
    use crate::ui::settings;
    use crate::ui::toggle_bar;
    use iced::{event, keyboard};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn create_test_image(dir: &Path, name: &str) {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
    }

    /// `color` section with rolls `summer` (3 slides) and `winter`
    /// (2 slides); `bw` section with one roll of 2 slides.
    fn build_gallery_root() -> tempfile::TempDir {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let summer = temp_dir.path().join("color").join("summer");
        let winter = temp_dir.path().join("color").join("winter");
        let street = temp_dir.path().join("bw").join("street");
        fs::create_dir_all(&summer).expect("dir");
        fs::create_dir_all(&winter).expect("dir");
        fs::create_dir_all(&street).expect("dir");
        create_test_image(&summer, "a.jpg");
        create_test_image(&summer, "b.jpg");
        create_test_image(&summer, "c.jpg");
        create_test_image(&winter, "x.jpg");
        create_test_image(&winter, "y.jpg");
        create_test_image(&street, "p.jpg");
        create_test_image(&street, "q.jpg");
        temp_dir
    }

    fn app_with_gallery(root: &Path) -> App {
        let (gallery, warnings) =
            Gallery::from_root(root, SortOrder::Alphabetical).expect("failed to build gallery");
        assert!(warnings.is_empty());
        App {
            gallery,
            ..App::default()
        }
    }

    fn current_index(app: &App, carousel: usize) -> Option<usize> {
        app.gallery
            .active_section()
            .and_then(|s| s.carousels.get(carousel))
            .and_then(|c| c.current_index())
    }

    fn press_key(named: keyboard::key::Named) -> Message {
        Message::RawEvent(event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::ArrowRight),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }))
    }

    #[test]
    fn new_starts_on_gallery_screen_without_sections() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Gallery);
            assert!(app.gallery.sections().is_empty());
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn new_with_gallery_path_builds_sections() {
        with_temp_config_dir(|_| {
            let root = build_gallery_root();
            let (app, _task) = App::new(Flags {
                gallery_path: Some(root.path().to_string_lossy().into_owned()),
                ..Flags::default()
            });

            assert_eq!(app.gallery.sections().len(), 2);
            assert!(app.gallery.active_section().is_none());
        });
    }

    #[test]
    fn new_with_missing_root_raises_error_notification() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                gallery_path: Some("/definitely/not/here".into()),
                ..Flags::default()
            });

            assert!(app.notifications.has_notifications());
            assert!(app.gallery.sections().is_empty());
        });
    }

    #[test]
    fn toggle_activates_sections_mutually_exclusively() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());

        // Initially nothing is active.
        assert!(app.gallery.toggle().active().is_none());

        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate(
            "color".into(),
        )));
        assert!(app.gallery.toggle().is_active("color"));
        assert!(!app.gallery.toggle().is_active("bw"));

        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate("bw".into())));
        assert!(app.gallery.toggle().is_active("bw"));
        assert!(!app.gallery.toggle().is_active("color"));
    }

    #[test]
    fn carousel_next_prev_and_select_update_the_index() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());
        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate(
            "color".into(),
        )));

        // summer roll has 3 slides: 0 -> 1 -> 2 -> wraps to 0
        let _ = app.update(Message::Carousel {
            index: 0,
            message: carousel_view::Message::Next,
        });
        assert_eq!(current_index(&app, 0), Some(1));

        let _ = app.update(Message::Carousel {
            index: 0,
            message: carousel_view::Message::Next,
        });
        let _ = app.update(Message::Carousel {
            index: 0,
            message: carousel_view::Message::Next,
        });
        assert_eq!(current_index(&app, 0), Some(0), "should wrap to first");

        let _ = app.update(Message::Carousel {
            index: 0,
            message: carousel_view::Message::Previous,
        });
        assert_eq!(current_index(&app, 0), Some(2), "should wrap backward");

        let _ = app.update(Message::Carousel {
            index: 0,
            message: carousel_view::Message::SelectSlide(1),
        });
        assert_eq!(current_index(&app, 0), Some(1));

        // Out-of-range select requests are silently ignored.
        let _ = app.update(Message::Carousel {
            index: 0,
            message: carousel_view::Message::SelectSlide(9),
        });
        assert_eq!(current_index(&app, 0), Some(1));
    }

    #[test]
    fn carousel_instances_are_independent() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());
        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate(
            "color".into(),
        )));

        let _ = app.update(Message::Carousel {
            index: 0,
            message: carousel_view::Message::Next,
        });

        assert_eq!(current_index(&app, 0), Some(1));
        assert_eq!(current_index(&app, 1), Some(0), "sibling roll untouched");
    }

    #[test]
    fn keyboard_arrows_navigate_the_focused_carousel() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());
        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate(
            "color".into(),
        )));

        let _ = app.update(press_key(keyboard::key::Named::ArrowRight));
        assert_eq!(current_index(&app, 0), Some(1));

        let _ = app.update(press_key(keyboard::key::Named::ArrowLeft));
        assert_eq!(current_index(&app, 0), Some(0));

        // Wrap backward from the first slide.
        let _ = app.update(press_key(keyboard::key::Named::ArrowLeft));
        assert_eq!(current_index(&app, 0), Some(2));
    }

    #[test]
    fn interacting_with_a_carousel_moves_keyboard_focus() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());
        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate(
            "color".into(),
        )));

        let _ = app.update(Message::Carousel {
            index: 1,
            message: carousel_view::Message::Next,
        });
        assert_eq!(app.gallery.focused(), 1);

        // Arrow keys now drive the winter roll (2 slides, currently at 1).
        let _ = app.update(press_key(keyboard::key::Named::ArrowRight));
        assert_eq!(current_index(&app, 1), Some(0));
        assert_eq!(current_index(&app, 0), Some(0));
    }

    #[test]
    fn keyboard_without_active_section_is_a_no_op() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());

        let _ = app.update(press_key(keyboard::key::Named::ArrowRight));
        assert!(app.gallery.active_section().is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());
        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate(
            "color".into(),
        )));

        let _ = app.update(press_key(keyboard::key::Named::ArrowUp));
        assert_eq!(current_index(&app, 0), Some(0));
    }

    #[test]
    fn navbar_switches_between_screens() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);

        let _ = app.update(Message::Navbar(navbar::Message::Back));
        assert_eq!(app.screen, Screen::Gallery);

        let _ = app.update(Message::Navbar(navbar::Message::OpenAbout));
        assert_eq!(app.screen, Screen::About);
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            let target_locale: unic_langid::LanguageIdentifier = app
                .i18n
                .available_locales
                .iter()
                .find(|locale| locale.to_string() == "fr")
                .cloned()
                .expect("fr locale should be embedded");

            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                target_locale.clone(),
            )));

            assert_eq!(app.i18n.current_locale(), &target_locale);

            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("fr"));
        });
    }

    #[test]
    fn theme_mode_selected_is_applied_and_persisted() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Light,
            )));

            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert_eq!(app.theme(), Theme::Light);

            let contents = fs::read_to_string(config_root.join("settings.toml"))
                .expect("config should be readable");
            assert!(contents.contains("light"));
        });
    }

    #[test]
    fn slide_loaded_stores_the_image() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());
        let _ = app.update(Message::Toggle(toggle_bar::Message::Activate(
            "color".into(),
        )));

        let _ = app.update(Message::SlideLoaded {
            section: 1, // "color" sorts after "bw"
            carousel: 0,
            slide: 0,
            result: Ok(ImageData::from_rgba(1, 1, vec![255; 4])),
        });

        let slide_has_image = app.gallery.active_section().map(|s| {
            s.carousels[0]
                .slides()
                .next()
                .map(|slide| slide.image().is_some())
                .unwrap_or(false)
        });
        assert_eq!(slide_has_image, Some(true));
    }

    #[test]
    fn slide_load_failure_raises_notification() {
        let root = build_gallery_root();
        let mut app = app_with_gallery(root.path());

        let _ = app.update(Message::SlideLoaded {
            section: 0,
            carousel: 0,
            slide: 0,
            result: Err(Error::Image("bad data".into())),
        });

        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn tick_dismisses_nothing_while_fresh() {
        let mut app = App::default();
        app.notifications.push(Notification::warning("test"));

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn title_shows_app_name_without_manifest_title() {
        let app = App::default();
        assert_eq!(app.title(), "Iced Gallery");
    }

    #[test]
    fn title_includes_manifest_page_title() {
        with_temp_config_dir(|_| {
            let root = build_gallery_root();
            fs::write(
                root.path().join("gallery.toml"),
                "title = \"Film Archive\"\n[[section]]\nid = \"color\"\n",
            )
            .expect("write manifest");

            let (app, _task) = App::new(Flags {
                gallery_path: Some(root.path().to_string_lossy().into_owned()),
                ..Flags::default()
            });

            assert_eq!(app.title(), "Film Archive - Iced Gallery");
        });
    }

    #[test]
    fn clamp_slide_height_bounds_config_values() {
        assert_eq!(clamp_slide_height(10.0), config::MIN_SLIDE_HEIGHT);
        assert_eq!(clamp_slide_height(9999.0), config::MAX_SLIDE_HEIGHT);
        assert_eq!(clamp_slide_height(300.0), 300.0);
    }

    #[test]
    fn layout_warning_notifications_carry_arguments() {
        let dangling = layout_warning_notification(&LayoutError::DanglingSection("bw".into()));
        assert_eq!(dangling.message_key(), "error-layout-dangling-section");
        assert_eq!(dangling.message_args().len(), 1);

        let empty = layout_warning_notification(&LayoutError::NoSections);
        assert_eq!(empty.message_key(), "error-layout-no-sections");
        assert!(empty.message_args().is_empty());
    }
}
