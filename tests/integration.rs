// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, SortOrder};
use iced_gallery::gallery::Gallery;
use iced_gallery::i18n::fluent::I18n;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn create_test_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).expect("failed to create test file");
    file.write_all(b"fake image data")
        .expect("failed to write test file");
    path
}

/// Builds a gallery root with two sections and three rolls on disk.
fn build_gallery_root() -> tempfile::TempDir {
    let root = tempdir().expect("failed to create temp dir");

    let summer = root.path().join("color").join("summer");
    let winter = root.path().join("color").join("winter");
    fs::create_dir_all(&summer).expect("dir");
    fs::create_dir_all(&winter).expect("dir");
    create_test_image(&summer, "a.jpg");
    create_test_image(&summer, "b.jpg");
    create_test_image(&summer, "c.jpg");
    create_test_image(&winter, "x.jpg");

    let street = root.path().join("black-and-white").join("street");
    fs::create_dir_all(&street).expect("dir");
    create_test_image(&street, "p.jpg");
    create_test_image(&street, "q.jpg");

    root
}

#[test]
fn test_gallery_bootstrap_and_carousel_cycle() {
    let root = build_gallery_root();
    let (mut gallery, warnings) =
        Gallery::from_root(root.path(), SortOrder::Alphabetical).expect("failed to build gallery");

    assert!(warnings.is_empty());
    assert_eq!(gallery.sections().len(), 2);

    gallery.activate_section("color");
    let carousel = gallery.carousel_mut(0).expect("summer roll");
    assert_eq!(carousel.len(), 3);

    // Concrete scenario: start 0, three nexts wrap back to 0.
    assert_eq!(carousel.current_index(), Some(0));
    carousel.next();
    assert_eq!(carousel.current_index(), Some(1));
    carousel.next();
    assert_eq!(carousel.current_index(), Some(2));
    carousel.next();
    assert_eq!(carousel.current_index(), Some(0));

    // Backward wrap from the first slide.
    carousel.previous();
    assert_eq!(carousel.current_index(), Some(2));
}

#[test]
fn test_toggle_switches_sections_exclusively() {
    let root = build_gallery_root();
    let (mut gallery, _warnings) =
        Gallery::from_root(root.path(), SortOrder::Alphabetical).expect("failed to build gallery");

    // Initial state: nothing active.
    assert!(gallery.toggle().active().is_none());

    gallery.activate_section("color");
    assert!(gallery.toggle().is_active("color"));
    assert!(!gallery.toggle().is_active("black-and-white"));

    gallery.activate_section("black-and-white");
    assert!(gallery.toggle().is_active("black-and-white"));
    assert!(!gallery.toggle().is_active("color"));

    // Navigation now applies to the black-and-white roll.
    let carousel = gallery.focused_carousel_mut().expect("street roll");
    carousel.next();
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn test_manifest_validation_drops_dangling_sections() {
    let root = build_gallery_root();
    fs::write(
        root.path().join("gallery.toml"),
        r#"
title = "Film Archive"
initial-section = "color"

[[section]]
id = "color"
title = "Colored Film"

[[section]]
id = "sepia"
"#,
    )
    .expect("write manifest");

    let (gallery, warnings) =
        Gallery::from_root(root.path(), SortOrder::Alphabetical).expect("failed to build gallery");

    assert_eq!(gallery.title(), Some("Film Archive"));
    assert_eq!(gallery.sections().len(), 1);
    assert_eq!(warnings.len(), 1, "dangling 'sepia' should warn");

    // The manifest's initial section is already active.
    assert!(gallery.toggle().is_active("color"));
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_empty_roll_navigation_never_faults() {
    let root = tempdir().expect("failed to create temp dir");
    // A section whose roll directory holds no images at all.
    fs::create_dir_all(root.path().join("color").join("empty-roll")).expect("dir");

    let (mut gallery, _warnings) =
        Gallery::from_root(root.path(), SortOrder::Alphabetical).expect("failed to build gallery");

    gallery.activate_section("color");
    let carousel = gallery.carousel_mut(0).expect("empty roll");

    assert!(carousel.is_empty());
    carousel.next();
    carousel.previous();
    carousel.go_to(0);
    assert_eq!(carousel.current_index(), None);
}
