// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for finding and sorting slide images.
//!
//! This module scans a roll directory for supported image formats, filters
//! them, and sorts them according to the configured sort order.

use crate::config::SortOrder;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// Scans a directory for supported slide images and sorts them.
///
/// Non-image files are skipped; subdirectories are not descended into.
/// Returns an error if the directory cannot be read.
pub fn scan_slides(directory: &Path, sort_order: SortOrder) -> Result<Vec<PathBuf>> {
    let mut slides = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            slides.push(path);
        }
    }

    sort_slides(&mut slides, sort_order);

    Ok(slides)
}

/// Lists the immediate subdirectories of `directory`, sorted by name.
///
/// Used to discover sections under the gallery root and rolls under a
/// section directory. Hidden directories (leading dot) are skipped.
pub fn scan_subdirectories(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with('.'))
            .unwrap_or(false);

        if path.is_dir() && !hidden {
            dirs.push(path);
        }
    }

    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(dirs)
}

/// Sorts slide paths according to the specified sort order.
fn sort_slides(slides: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            slides.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            slides.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            slides.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}
