// SPDX-License-Identifier: MPL-2.0
//! Toggle group: mutually exclusive activation of page sections.
//!
//! One group exists per gallery page. Each button targets a section id; at
//! most one button (and its section) is active at any time. The active
//! marker is a single `Option`, so exclusivity holds by construction
//! rather than by sweeping deactivation passes.

use super::layout::SectionSpec;

/// A toggle control targeting one section.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleButton {
    /// Identifier of the section this button activates.
    pub section_id: String,
    /// Label shown on the button.
    pub label: String,
}

/// The page-wide set of toggle buttons and the single active section.
#[derive(Debug, Clone, Default)]
pub struct ToggleGroup {
    buttons: Vec<ToggleButton>,
    active: Option<String>,
}

impl ToggleGroup {
    /// Builds the group from the resolved sections.
    ///
    /// Buttons are created only for sections that exist, so a click can
    /// never target a missing section (dangling declarations were already
    /// dropped during layout validation). Nothing is active initially.
    pub fn new(sections: &[SectionSpec]) -> Self {
        Self {
            buttons: sections
                .iter()
                .map(|section| ToggleButton {
                    section_id: section.id.clone(),
                    label: section.title.clone(),
                })
                .collect(),
            active: None,
        }
    }

    /// The buttons, in section order.
    pub fn buttons(&self) -> &[ToggleButton] {
        &self.buttons
    }

    /// The id of the active section, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the button (and section) with the given id is active.
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    /// Activates the button targeting `section_id` and its section,
    /// deactivating whichever was active before.
    ///
    /// Returns `true` when the activation took effect. Requests for ids no
    /// button targets are ignored and leave the previous activation intact.
    pub fn activate(&mut self, section_id: &str) -> bool {
        if self.buttons.iter().any(|b| b.section_id == section_id) {
            self.active = Some(section_id.to_string());
            true
        } else {
            false
        }
    }
}
