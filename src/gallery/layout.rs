// SPDX-License-Identifier: MPL-2.0
//! Gallery layout: the structural contract between the application and the
//! content on disk.
//!
//! A gallery root either carries a `gallery.toml` manifest declaring its
//! sections, or the sections are discovered as the immediate subdirectories
//! of the root. Every declared section must resolve to an existing
//! directory; dangling declarations are dropped at load time and surfaced
//! as startup warnings instead of faulting later in a click handler.

use crate::error::{Error, LayoutError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "gallery.toml";

/// A resolved content section: one toggleable subsection of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpec {
    /// Stable identifier used by toggle buttons to address the section.
    pub id: String,
    /// Human-readable label shown on the toggle button.
    pub title: String,
    /// Absolute directory holding the section's rolls.
    pub dir: PathBuf,
}

/// The resolved page structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryLayout {
    /// Optional page title shown in the window title bar.
    pub title: Option<String>,
    /// Section to activate on startup, if declared.
    pub initial_section: Option<String>,
    /// Sections in declaration (or discovery) order.
    pub sections: Vec<SectionSpec>,
}

impl GalleryLayout {
    /// Whether a section with the given id exists.
    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id)
    }
}

// =============================================================================
// Manifest format
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Manifest {
    title: Option<String>,
    initial_section: Option<String>,
    #[serde(default, rename = "section")]
    sections: Vec<ManifestSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ManifestSection {
    id: String,
    title: Option<String>,
    /// Directory relative to the gallery root; defaults to the id.
    dir: Option<String>,
}

// =============================================================================
// Loading
// =============================================================================

/// Loads the layout for a gallery root.
///
/// Returns the resolved layout together with any non-fatal warnings
/// (dangling sections, unresolvable initial section). A missing or
/// unreadable root and an unparsable manifest are fatal.
pub fn load(root: &Path) -> Result<(GalleryLayout, Vec<LayoutError>)> {
    if !root.is_dir() {
        return Err(Error::Layout(LayoutError::RootUnreadable(
            root.display().to_string(),
        )));
    }

    let manifest_path = root.join(MANIFEST_FILE);
    if manifest_path.exists() {
        load_from_manifest(root, &manifest_path)
    } else {
        discover(root)
    }
}

/// Resolves a manifest into a layout, validating every declared section.
fn load_from_manifest(root: &Path, manifest_path: &Path) -> Result<(GalleryLayout, Vec<LayoutError>)> {
    let content = std::fs::read_to_string(manifest_path)?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|err| Error::Layout(LayoutError::InvalidManifest(err.to_string())))?;

    let mut warnings = Vec::new();
    let mut sections = Vec::new();

    for entry in manifest.sections {
        let dir = root.join(entry.dir.as_deref().unwrap_or(&entry.id));
        if dir.is_dir() {
            let title = entry.title.unwrap_or_else(|| display_name(&entry.id));
            sections.push(SectionSpec {
                id: entry.id,
                title,
                dir,
            });
        } else {
            warnings.push(LayoutError::DanglingSection(entry.id));
        }
    }

    if sections.is_empty() {
        warnings.push(LayoutError::NoSections);
    }

    let mut layout = GalleryLayout {
        title: manifest.title,
        initial_section: manifest.initial_section,
        sections,
    };

    // An initial section that no longer resolves is the same configuration
    // error as a dangling button target: warn and ignore it.
    if let Some(initial) = &layout.initial_section {
        if !layout.has_section(initial) {
            warnings.push(LayoutError::DanglingSection(initial.clone()));
            layout.initial_section = None;
        }
    }

    Ok((layout, warnings))
}

/// Discovers sections as the immediate subdirectories of the root.
fn discover(root: &Path) -> Result<(GalleryLayout, Vec<LayoutError>)> {
    let dirs = super::scanner::scan_subdirectories(root)
        .map_err(|_| Error::Layout(LayoutError::RootUnreadable(root.display().to_string())))?;

    let sections: Vec<SectionSpec> = dirs
        .into_iter()
        .filter_map(|dir| {
            let id = dir.file_name()?.to_str()?.to_string();
            let title = display_name(&id);
            Some(SectionSpec { id, title, dir })
        })
        .collect();

    let warnings = if sections.is_empty() {
        vec![LayoutError::NoSections]
    } else {
        Vec::new()
    };

    Ok((
        GalleryLayout {
            title: None,
            initial_section: None,
            sections,
        },
        warnings,
    ))
}

/// Turns a directory-style identifier into a display label
/// (`black-and-white` becomes `Black And White`).
pub(crate) fn display_name(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
