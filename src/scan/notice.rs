//! `notice/` scanning: dated notice folders to `notice.json`.
//!
//! ```text
//! notice/
//! ├── 20240115-New_Policy/        → {"id": "New-Policy", "date": "2024-01-15",
//! │   └── doc.pdf                    "title": "New Policy", "files": [...]}
//! ├── 20231201-Holiday_Closure/
//! │   ├── poster.png
//! │   └── letter.pdf
//! ├── 2024-Old/                   (malformed date, skipped with a warning)
//! ├── drafts/                     (no hyphen, not a notice)
//! └── 20230101-Empty/             (no files, omitted)
//! ```
//!
//! Folders are visited descending by name, which for the date-prefixed
//! convention means newest first; the list is written in that order.
//!
//! A folder that fails (malformed name, unreadable contents) is logged and
//! skipped. The rest of the scan carries on.

use super::{ScanError, read_sorted};
use crate::config::IndexConfig;
use crate::listing::{Entry, slash_path};
use crate::naming::{self, NameError, NoticeName};
use crate::types::{Notice, NoticeFile, NoticeManifest};
use std::path::Path;
use thiserror::Error;

/// Why a single notice folder was rejected.
#[derive(Error, Debug)]
pub enum NoticeError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Why a child of the notice directory produced no record.
#[derive(Debug)]
pub enum SkipReason {
    /// Folder name has no hyphen; not a notice folder.
    NotDated,
    /// Folder holds no files.
    Empty,
    /// Folder looked like a notice but could not be processed.
    Failed(NoticeError),
}

#[derive(Debug)]
pub struct SkippedFolder {
    pub name: String,
    pub reason: SkipReason,
}

/// Notice manifest plus what was left out of it.
#[derive(Debug, Default)]
pub struct NoticeScan {
    /// False when the notice directory doesn't exist.
    pub source_found: bool,
    pub manifest: NoticeManifest,
    pub skipped: Vec<SkippedFolder>,
}

impl NoticeScan {
    /// Folders that were rejected with an error, in visit order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &NoticeError)> {
        self.skipped.iter().filter_map(|s| match &s.reason {
            SkipReason::Failed(err) => Some((s.name.as_str(), err)),
            _ => None,
        })
    }
}

/// Scan `<root>/<notice_dir>`.
///
/// A missing directory yields an empty manifest with `source_found` unset.
/// Only a failure to list the notice directory itself is an error.
pub fn scan_notices(root: &Path, config: &IndexConfig) -> Result<NoticeScan, ScanError> {
    let dir = root.join(&config.notice_dir);
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "notice directory not found");
        return Ok(NoticeScan::default());
    }

    let mut scan = NoticeScan {
        source_found: true,
        ..NoticeScan::default()
    };
    for folder in read_sorted(&dir)?.into_iter().filter(|e| e.is_dir) {
        match build_notice(&folder, config) {
            Ok(Some(notice)) => scan.manifest.notices.push(notice),
            Ok(None) => {
                let reason = if folder.name.contains('-') {
                    SkipReason::Empty
                } else {
                    SkipReason::NotDated
                };
                tracing::debug!(folder = %folder.name, ?reason, "notice folder skipped");
                scan.skipped.push(SkippedFolder {
                    name: folder.name,
                    reason,
                });
            }
            Err(err) => {
                tracing::warn!(folder = %folder.name, error = %err, "skipping notice folder");
                scan.skipped.push(SkippedFolder {
                    name: folder.name,
                    reason: SkipReason::Failed(err),
                });
            }
        }
    }

    Ok(scan)
}

/// Build the record for one folder. `Ok(None)` means "not a notice" or "no files".
fn build_notice(folder: &Entry, config: &IndexConfig) -> Result<Option<Notice>, NoticeError> {
    let Some(NoticeName {
        date,
        title,
        id,
        display_name,
    }) = naming::parse_notice_name(&folder.name)?
    else {
        return Ok(None);
    };

    let files: Vec<NoticeFile> = read_sorted(&folder.path)?
        .iter()
        .filter(|e| e.is_file)
        .map(|e| NoticeFile {
            file_name: display_name.clone(),
            file_type: file_type(&e.name),
            file_path: slash_path(&[&config.notice_dir, &folder.name, &e.name]),
        })
        .collect();

    if files.is_empty() {
        return Ok(None);
    }
    Ok(Some(Notice {
        id,
        date,
        title,
        files,
    }))
}

/// Lowercase extension without the dot; empty for names without one.
fn file_type(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
