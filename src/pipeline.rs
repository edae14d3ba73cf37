//! The full indexing run: scan every source, write every manifest.
//!
//! Stages run in a fixed order and share nothing but the output directory:
//!
//! ```text
//! 1. media    media/   →  database/media.json    (skipped if media/ is missing)
//! 2. others   others/  →  database/others.json   (skipped if others/ is missing)
//! 3. notice   notice/  →  database/notice.json   (always written)
//! 4. version           →  database/version.json  (always bumped)
//! ```
//!
//! A failure in any stage aborts the run before the following stages.
//! Per-folder notice failures are not stage failures: they are logged and
//! reported in [`BuildReport::notice_scan`].
//!
//! [`Mode::Check`] runs the same scans but writes nothing and does not
//! create the output directory.

use crate::config::IndexConfig;
use crate::manifest::{
    self, MEDIA_FILENAME, ManifestError, NOTICE_FILENAME, OTHERS_FILENAME, VERSION_FILENAME,
};
use crate::scan::{self, NoticeScan, ScanError};
use crate::types::{MediaManifest, OthersManifest, VersionStamp};
use crate::version::{self, VersionError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Whether a run writes its manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    Check,
}

/// What happened to one manifest file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Written to this path.
    Written(PathBuf),
    /// Would be written to this path (check mode).
    Pending(PathBuf),
    /// Source directory missing; the existing file at this path was left alone.
    Untouched(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Written(p) | Outcome::Pending(p) | Outcome::Untouched(p) => p,
        }
    }
}

/// Result of one media or others stage.
#[derive(Debug)]
pub struct StageReport<T> {
    /// Source directory, relative to the content root.
    pub source: String,
    /// `None` when the source directory is missing.
    pub manifest: Option<T>,
    pub outcome: Outcome,
}

/// Everything a run did, for display and for tests.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub media: StageReport<MediaManifest>,
    pub others: StageReport<OthersManifest>,
    pub notice_source: String,
    pub notice_scan: NoticeScan,
    pub notice_outcome: Outcome,
    pub version: VersionStamp,
    pub version_outcome: Outcome,
}

/// Run every stage against `root` with the given configuration.
pub fn run(root: &Path, config: &IndexConfig, mode: Mode) -> Result<BuildReport, IndexError> {
    let output_dir = root.join(&config.output_dir);
    if mode == Mode::Write {
        std::fs::create_dir_all(&output_dir).map_err(|source| IndexError::OutputDir {
            path: output_dir.clone(),
            source,
        })?;
    }

    let media_manifest = scan::scan_media(root, config)?;
    let media_outcome = emit(&output_dir, MEDIA_FILENAME, media_manifest.as_ref(), mode)?;
    let media = StageReport {
        source: config.media_dir.clone(),
        manifest: media_manifest,
        outcome: media_outcome,
    };

    let others_manifest = scan::scan_others(root, config)?;
    let others_outcome = emit(&output_dir, OTHERS_FILENAME, others_manifest.as_ref(), mode)?;
    let others = StageReport {
        source: config.others_dir.clone(),
        manifest: others_manifest,
        outcome: others_outcome,
    };

    let notice_scan = scan::scan_notices(root, config)?;
    let notice_outcome = emit(&output_dir, NOTICE_FILENAME, Some(&notice_scan.manifest), mode)?;

    let (version, version_outcome) = match mode {
        Mode::Write => {
            let (stamp, path) = version::stamp_version(&output_dir)?;
            (stamp, Outcome::Written(path))
        }
        Mode::Check => (
            version::next_version(&output_dir)?,
            Outcome::Pending(output_dir.join(VERSION_FILENAME)),
        ),
    };

    Ok(BuildReport {
        output_dir,
        media,
        others,
        notice_source: config.notice_dir.clone(),
        notice_scan,
        notice_outcome,
        version,
        version_outcome,
    })
}

/// Write `manifest` (or not, depending on mode and whether there is one).
fn emit<T: Serialize>(
    output_dir: &Path,
    file_name: &str,
    manifest: Option<&T>,
    mode: Mode,
) -> Result<Outcome, ManifestError> {
    let target = output_dir.join(file_name);
    match (manifest, mode) {
        (None, _) => {
            tracing::info!(file = file_name, "source missing, leaving manifest untouched");
            Ok(Outcome::Untouched(target))
        }
        (Some(_), Mode::Check) => Ok(Outcome::Pending(target)),
        (Some(m), Mode::Write) => Ok(Outcome::Written(manifest::write_manifest(
            output_dir, file_name, m,
        )?)),
    }
}
