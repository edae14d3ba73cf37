//! `media/` scanning: image subfolders to `media.json`.
//!
//! ```text
//! media/
//! ├── 2023-graduation/     →  "2023-graduation": ["media/2023-graduation/b.jpg",
//! │   ├── a.jpg                                    "media/2023-graduation/a.jpg"]
//! │   ├── b.jpg
//! │   └── notes.txt        (not an image, ignored)
//! ├── empty-folder/        (no images, never listed)
//! └── loose.jpg            (not in a subfolder, ignored)
//! ```

use super::{ScanError, read_sorted};
use crate::config::IndexConfig;
use crate::listing::slash_path;
use crate::types::MediaManifest;
use indexmap::IndexMap;
use std::path::Path;

/// Scan `<root>/<media_dir>`. Returns `None` if the directory doesn't exist.
///
/// Folder keys come out ascending; images within a folder stay descending.
pub fn scan_media(root: &Path, config: &IndexConfig) -> Result<Option<MediaManifest>, ScanError> {
    let dir = root.join(&config.media_dir);
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "media directory not found");
        return Ok(None);
    }

    let mut images: IndexMap<String, Vec<String>> = IndexMap::new();
    for folder in read_sorted(&dir)?.into_iter().filter(|e| e.is_dir) {
        let files: Vec<String> = read_sorted(&folder.path)?
            .iter()
            .filter(|e| e.is_file && config.extensions.is_image(&e.name))
            .map(|e| slash_path(&[&config.media_dir, &folder.name, &e.name]))
            .collect();
        if files.is_empty() {
            continue;
        }
        images.insert(folder.name, files);
    }
    images.reverse();

    Ok(Some(MediaManifest { images }))
}
