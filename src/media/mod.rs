// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for gallery slides.
//!
//! Slides are decoded off the UI thread (via `Task::perform`) and handed
//! back to the update loop as [`ImageData`], which wraps an Iced image
//! handle together with the pixel dimensions.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// Supported slide file extensions (lowercase, without the dot).
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// A decoded slide image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Checks whether a path has a supported slide image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Loads and decodes an image from disk.
///
/// Returns the decoded RGBA data or an [`Error::Image`] if the file cannot
/// be read or is not a valid image.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let bytes = std::fs::read(path).map_err(Error::from)?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}
