//! `others/` scanning: a flat directory of media files to `others.json`.
//!
//! Keys are file names without their extension. Two files sharing a base name
//! collide: files are visited descending by full name, so `banner.png` is
//! visited before `banner.jpg` and the later visit wins the value while the
//! key keeps the position of its first insertion.

use super::{ScanError, read_sorted};
use crate::config::IndexConfig;
use crate::listing::slash_path;
use crate::types::OthersManifest;
use indexmap::IndexMap;
use std::path::Path;

/// Scan `<root>/<others_dir>`. Returns `None` if the directory doesn't exist.
pub fn scan_others(
    root: &Path,
    config: &IndexConfig,
) -> Result<Option<OthersManifest>, ScanError> {
    let dir = root.join(&config.others_dir);
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "others directory not found");
        return Ok(None);
    }

    let mut entries: IndexMap<String, String> = IndexMap::new();
    for file in read_sorted(&dir)? {
        if !file.is_file || !config.extensions.is_media(&file.name) {
            continue;
        }
        let key = base_name(&file.name).to_string();
        let path = slash_path(&[&config.others_dir, &file.name]);
        if let Some(previous) = entries.insert(key, path) {
            tracing::debug!(replaced = %previous, by = %file.name, "base name collision");
        }
    }
    entries.reverse();

    Ok(Some(OthersManifest { entries }))
}

/// File name with its last extension removed (`a.b.jpg` → `a.b`).
fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}
