// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Layout(LayoutError),
}

/// Specific error types for gallery layout problems.
/// Used to provide user-friendly, localized startup diagnostics.
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// The gallery root directory does not exist or cannot be read.
    RootUnreadable(String),

    /// The `gallery.toml` manifest is present but cannot be parsed.
    InvalidManifest(String),

    /// A section declares a directory that does not exist.
    DanglingSection(String),

    /// The manifest declares no sections at all.
    NoSections,
}

impl LayoutError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LayoutError::RootUnreadable(_) => "error-layout-root-unreadable",
            LayoutError::InvalidManifest(_) => "error-layout-invalid-manifest",
            LayoutError::DanglingSection(_) => "error-layout-dangling-section",
            LayoutError::NoSections => "error-layout-no-sections",
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::RootUnreadable(path) => {
                write!(f, "Gallery root is not readable: {}", path)
            }
            LayoutError::InvalidManifest(msg) => write!(f, "Invalid gallery manifest: {}", msg),
            LayoutError::DanglingSection(id) => {
                write!(f, "Section '{}' points to a missing directory", id)
            }
            LayoutError::NoSections => write!(f, "Gallery manifest declares no sections"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Layout(e) => write!(f, "Layout Error: {}", e),
        }
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Error::Layout(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
