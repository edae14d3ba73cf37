//! Source directory scanning.
//!
//! One scanner per manifest. Each reads a single subtree of the content root
//! and returns the manifest it would write; none of them touches the output
//! directory. Writing is left to [`crate::pipeline`] so that `check` can run
//! the exact same scan without side effects.
//!
//! | Scanner | Source | Manifest |
//! |---------|--------|----------|
//! | [`media::scan_media`] | `media/<subfolder>/<image>` | [`MediaManifest`](crate::types::MediaManifest) |
//! | [`others::scan_others`] | `others/<file>` | [`OthersManifest`](crate::types::OthersManifest) |
//! | [`notice::scan_notices`] | `notice/<YYYYMMDD-Title>/<file>` | [`NoticeManifest`](crate::types::NoticeManifest) |
//!
//! ## Ordering
//!
//! Every directory is enumerated descending by name. The media and others
//! manifests are built in that order and then reversed, so their keys come
//! out ascending; notices keep the descending order (newest date first).
//!
//! ## Missing Sources
//!
//! A missing `media/` or `others/` directory yields `None`: the previous
//! manifest, if any, is left as it is. A missing `notice/` directory yields
//! an empty notice list, which is still written.

pub mod media;
pub mod notice;
pub mod others;

use crate::listing::{self, Entry};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use media::scan_media;
pub use notice::{NoticeScan, SkipReason, SkippedFolder, scan_notices};
pub use others::scan_others;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// List a directory descending by name, attaching the path to any failure.
pub(crate) fn read_sorted(dir: &Path) -> Result<Vec<Entry>, ScanError> {
    listing::list_descending(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })
}
