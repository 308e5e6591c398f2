// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a film gallery viewer built with the Iced GUI framework.
//!
//! It renders a static gallery page as independent image carousels grouped
//! into toggleable subsections, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;

pub use app::config;
