// SPDX-License-Identifier: MPL-2.0
//! Gallery page state: sections of film-roll carousels plus the toggle
//! group that activates one section at a time.
//!
//! The gallery is assembled exactly once at startup ([`Gallery::from_root`])
//! by scanning the content directory, and is mutated afterwards only through
//! carousel navigation and section activation. Carousel instances are fully
//! independent; nothing here coordinates their indices.

pub mod carousel;
pub mod layout;
pub mod scanner;
pub mod toggle;

pub use carousel::Carousel;
pub use layout::GalleryLayout;
pub use toggle::ToggleGroup;

use crate::config::SortOrder;
use crate::error::{LayoutError, Result};
use std::path::Path;

/// A toggleable subsection holding its carousels.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub carousels: Vec<Carousel>,
}

/// The whole page: sections, toggle state, and keyboard focus.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    title: Option<String>,
    sections: Vec<Section>,
    toggle: ToggleGroup,
    /// Carousel (within the active section) that receives arrow keys.
    focused: usize,
}

impl Gallery {
    /// Builds the gallery from a content root.
    ///
    /// This is the one-time bootstrap: resolve the layout, construct one
    /// [`Carousel`] per roll directory, build the toggle group, and apply
    /// the declared initial section if any. Returns the gallery together
    /// with non-fatal layout warnings for startup diagnostics.
    pub fn from_root(root: &Path, sort_order: SortOrder) -> Result<(Self, Vec<LayoutError>)> {
        let (layout, mut warnings) = layout::load(root)?;

        let mut sections = Vec::new();
        for spec in &layout.sections {
            let carousels = build_carousels(&spec.dir, sort_order, &mut warnings);
            sections.push(Section {
                id: spec.id.clone(),
                title: spec.title.clone(),
                carousels,
            });
        }

        let mut toggle = ToggleGroup::new(&layout.sections);
        if let Some(initial) = &layout.initial_section {
            toggle.activate(initial);
        }

        Ok((
            Self {
                title: layout.title,
                sections,
                toggle,
                focused: 0,
            },
            warnings,
        ))
    }

    /// Optional page title from the manifest.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All sections in page order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The toggle group.
    pub fn toggle(&self) -> &ToggleGroup {
        &self.toggle
    }

    /// Activates a section by id, resetting keyboard focus to its first
    /// carousel. Unknown ids are ignored.
    pub fn activate_section(&mut self, section_id: &str) -> bool {
        let activated = self.toggle.activate(section_id);
        if activated {
            self.focused = 0;
        }
        activated
    }

    /// Index of the active section, if one is active.
    pub fn active_section_index(&self) -> Option<usize> {
        let active = self.toggle.active()?;
        self.sections.iter().position(|section| section.id == active)
    }

    /// The active section, if one is active.
    pub fn active_section(&self) -> Option<&Section> {
        self.active_section_index().map(|idx| &self.sections[idx])
    }

    /// Index of the carousel receiving keyboard navigation.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Moves keyboard focus to the carousel at `index` in the active
    /// section. Out-of-range requests are ignored.
    pub fn focus_carousel(&mut self, index: usize) {
        if let Some(section) = self.active_section() {
            if index < section.carousels.len() {
                self.focused = index;
            }
        }
    }

    /// Mutable access to a carousel of the active section.
    pub fn carousel_mut(&mut self, index: usize) -> Option<&mut Carousel> {
        let section_idx = self.active_section_index()?;
        self.sections[section_idx].carousels.get_mut(index)
    }

    /// Mutable access to the focused carousel of the active section.
    pub fn focused_carousel_mut(&mut self) -> Option<&mut Carousel> {
        let focused = self.focused;
        self.carousel_mut(focused)
    }

    /// Mutable access to a carousel in any section (used to store slide
    /// images that finished decoding after the user toggled away).
    pub fn carousel_in_section_mut(
        &mut self,
        section_index: usize,
        carousel_index: usize,
    ) -> Option<&mut Carousel> {
        self.sections
            .get_mut(section_index)?
            .carousels
            .get_mut(carousel_index)
    }
}

/// Builds the carousels of one section directory.
///
/// Each subdirectory becomes a roll; a section directory holding images but
/// no subdirectories becomes a single roll. Unreadable roll directories are
/// skipped with a warning.
fn build_carousels(
    section_dir: &Path,
    sort_order: SortOrder,
    warnings: &mut Vec<LayoutError>,
) -> Vec<Carousel> {
    let roll_dirs = match scanner::scan_subdirectories(section_dir) {
        Ok(dirs) => dirs,
        Err(_) => {
            warnings.push(LayoutError::RootUnreadable(
                section_dir.display().to_string(),
            ));
            return Vec::new();
        }
    };

    if roll_dirs.is_empty() {
        // Loose images directly under the section form one roll.
        return match scanner::scan_slides(section_dir, sort_order) {
            Ok(slides) if !slides.is_empty() => {
                let name = dir_display_name(section_dir);
                vec![Carousel::new(name, slides)]
            }
            _ => Vec::new(),
        };
    }

    let mut carousels = Vec::new();
    for dir in roll_dirs {
        match scanner::scan_slides(&dir, sort_order) {
            Ok(slides) => {
                carousels.push(Carousel::new(dir_display_name(&dir), slides));
            }
            Err(_) => {
                warnings.push(LayoutError::RootUnreadable(dir.display().to_string()));
            }
        }
    }
    carousels
}

fn dir_display_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(layout::display_name)
        .unwrap_or_default()
}
