//! Media extension classification.
//!
//! Every indexer filters directory entries by file extension alone; file
//! contents are never inspected. Extensions are compared case-insensitively
//! against two disjoint lists of lowercase, dot-prefixed strings:
//!
//! ```text
//! images: .jpg .jpeg .png .gif .bmp .tiff .webp
//! videos: .mp4 .mov .avi .mkv .webm .flv
//! ```
//!
//! The media indexer accepts images only; the others indexer accepts the
//! union of both lists.

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const STOCK_IMAGE_EXTENSIONS: &[&str] =
    &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"];
pub const STOCK_VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".avi", ".mkv", ".webm", ".flv"];

/// Category a recognized extension belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// The image and video extension lists, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionSet {
    /// Dot-prefixed lowercase image extensions, e.g. `".jpg"`.
    pub images: Vec<String>,
    /// Dot-prefixed lowercase video extensions, e.g. `".mp4"`.
    pub videos: Vec<String>,
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            images: STOCK_IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            videos: STOCK_VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExtensionSet {
    /// Classify a file name by its extension.
    ///
    /// Returns `None` for names without an extension and for extensions in
    /// neither list.
    pub fn classify(&self, file_name: &str) -> Option<MediaKind> {
        let ext = dotted_extension(file_name)?;
        if self.images.iter().any(|e| *e == ext) {
            Some(MediaKind::Image)
        } else if self.videos.iter().any(|e| *e == ext) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    pub fn is_image(&self, file_name: &str) -> bool {
        self.classify(file_name) == Some(MediaKind::Image)
    }

    /// True for anything in the image or video list.
    pub fn is_media(&self, file_name: &str) -> bool {
        self.classify(file_name).is_some()
    }

    /// All recognized extensions, images first.
    pub fn all_media(&self) -> impl Iterator<Item = &str> {
        self.images.iter().chain(self.videos.iter()).map(String::as_str)
    }

    /// Check the list invariants, returning a description of the first violation.
    pub fn check(&self) -> Result<(), String> {
        for ext in self.all_media() {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(format!(
                    "extension {ext:?} must start with '.' and name a suffix"
                ));
            }
            if ext != ext.to_lowercase() {
                return Err(format!("extension {ext:?} must be lowercase"));
            }
        }
        if let Some(shared) = self.images.iter().find(|e| self.videos.contains(e)) {
            return Err(format!(
                "extension {shared:?} is listed as both image and video"
            ));
        }
        Ok(())
    }
}

/// Lowercased extension of a file name including the leading dot.
///
/// Follows `Path::extension`: dotfiles like `.hidden` have no extension.
fn dotted_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
}
