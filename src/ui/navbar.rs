// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! A slim toolbar across the top of every screen: the page title on the
//! left, Settings/About on the right, and a Back button when a secondary
//! screen is showing.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    /// Page title from the gallery manifest, if declared.
    pub gallery_title: Option<&'a str>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenSettings,
    OpenAbout,
    Back,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx
        .gallery_title
        .map(String::from)
        .unwrap_or_else(|| ctx.i18n.tr("window-title"));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    match ctx.screen {
        Screen::Gallery => {
            let settings_button = button(Text::new(ctx.i18n.tr("navbar-settings-button")))
                .on_press(Message::OpenSettings)
                .padding([spacing::XXS, spacing::SM]);
            let about_button = button(Text::new(ctx.i18n.tr("navbar-about-button")))
                .on_press(Message::OpenAbout)
                .padding([spacing::XXS, spacing::SM]);
            row = row.push(settings_button).push(about_button);
        }
        Screen::Settings | Screen::About => {
            let back_button = button(Text::new(ctx.i18n.tr("navbar-back-button")))
                .on_press(Message::Back)
                .padding([spacing::XXS, spacing::SM]);
            row = row.push(back_button);
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_renders_on_gallery_screen() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            screen: Screen::Gallery,
            gallery_title: None,
        });
    }

    #[test]
    fn navbar_renders_back_on_secondary_screens() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            screen: Screen::Settings,
            gallery_title: Some("Film Archive"),
        });
        let _element = view(ViewContext {
            i18n: &i18n,
            screen: Screen::About,
            gallery_title: None,
        });
    }
}
