// SPDX-License-Identifier: MPL-2.0
//! Toggle bar: the row of section buttons at the top of the gallery screen.
//!
//! Exactly one button is rendered per section; the active one uses the
//! selected style, all others the unselected style. Pressing a button emits
//! an activation request for its target section.

use crate::gallery::ToggleGroup;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Row, Text},
    Element, Length,
};

/// Messages emitted by the toggle bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// Activate the section with this id.
    Activate(String),
}

/// Renders the toggle button row.
pub fn view(toggle: &ToggleGroup) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::SM);

    for toggle_button in toggle.buttons() {
        let label = Text::new(toggle_button.label.clone());
        let styled = if toggle.is_active(&toggle_button.section_id) {
            button(label).style(styles::button::selected)
        } else {
            button(label).style(styles::button::unselected)
        };

        row = row.push(
            styled
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::Activate(toggle_button.section_id.clone())),
        );
    }

    iced::widget::Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::SM)
        .into()
}
