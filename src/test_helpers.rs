//! Shared test utilities for the content-index test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let report = pipeline::run(tmp.path(), &IndexConfig::default(), Mode::Write).unwrap();
//! assert_eq!(notice_ids(&report.notice_scan.manifest), vec!["New-Policy", "holiday-closure"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{MediaManifest, NoticeManifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// The fixture holds `media/`, `others/` and `notice/` trees covering the
/// ordering, filtering and notice-rejection cases.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create each `/`-separated relative path under `root` as a small file,
/// creating parent directories as needed.
pub fn touch_all(root: &Path, paths: &[&str]) {
    for rel in paths {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "x").unwrap();
    }
}

// =========================================================================
// Manifest extractors
// =========================================================================

/// Media folder names in manifest order.
pub fn media_folders(manifest: &MediaManifest) -> Vec<&str> {
    manifest.images.keys().map(String::as_str).collect()
}

/// Notice ids in manifest order.
pub fn notice_ids(manifest: &NoticeManifest) -> Vec<&str> {
    manifest.notices.iter().map(|n| n.id.as_str()).collect()
}

/// Parse a written manifest. Panics with the path on failure.
pub fn read_json(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", path.display()))
}
