//! CLI output formatting for an indexing run.
//!
//! # Information-First Display
//!
//! Each stage leads with what was indexed (folders, files, notices), with
//! the manifest path as the stage header. Rejected notice folders are listed
//! under the notice stage so a bad folder name is visible without enabling
//! debug logs.
//!
//! # Output Format
//!
//! ```text
//! Media → database/media.json
//!     001 2023-sports-day (2 images)
//!     002 2024-graduation (3 images)
//!
//! Others → database/others.json
//!     001 banner
//!         Source: others/banner.png
//!
//! Notices → database/notice.json
//!     001 2024-01-15 New Policy (1 file)
//!     Skipped 2024-Old: date part "2024" is not eight digits (expected YYYYMMDD)
//!
//! Version → database/version.json
//!     0
//! ```
//!
//! A missing source replaces the entries with a single line:
//!
//! ```text
//! Media → database/media.json
//!     media/ not found, manifest left untouched
//! ```
//!
//! # Architecture
//!
//! [`format_build_output`] is pure (returns `Vec<String>`) for testability;
//! [`print_build_output`] writes it to stdout.

use crate::pipeline::{BuildReport, Outcome};
use crate::scan::SkipReason;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `1 file`, `2 files`.
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Stage header: `Media → database/media.json`, with the outcome when it
/// isn't a plain write.
fn stage_header(label: &str, outcome: &Outcome, root: &Path) -> String {
    let path = outcome.path();
    let shown = path.strip_prefix(root).unwrap_or(path).display();
    match outcome {
        Outcome::Written(_) | Outcome::Untouched(_) => format!("{label} → {shown}"),
        Outcome::Pending(_) => format!("{label} → {shown} (not written)"),
    }
}

/// Format the report of a whole run, one stage per block.
pub fn format_build_output(report: &BuildReport, root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    // Media
    lines.push(stage_header("Media", &report.media.outcome, root));
    match &report.media.manifest {
        Some(manifest) => {
            for (i, (folder, images)) in manifest.images.iter().enumerate() {
                lines.push(format!(
                    "    {} {} ({})",
                    format_index(i + 1),
                    folder,
                    plural(images.len(), "image")
                ));
            }
        }
        None => lines.push(format!(
            "    {}/ not found, manifest left untouched",
            report.media.source
        )),
    }

    // Others
    lines.push(String::new());
    lines.push(stage_header("Others", &report.others.outcome, root));
    match &report.others.manifest {
        Some(manifest) => {
            for (i, (name, path)) in manifest.entries.iter().enumerate() {
                lines.push(format!("    {} {}", format_index(i + 1), name));
                lines.push(format!("        Source: {}", path));
            }
        }
        None => lines.push(format!(
            "    {}/ not found, manifest left untouched",
            report.others.source
        )),
    }

    // Notices
    lines.push(String::new());
    lines.push(stage_header("Notices", &report.notice_outcome, root));
    let scan = &report.notice_scan;
    if !scan.source_found {
        lines.push(format!(
            "    {}/ not found, writing an empty list",
            report.notice_source
        ));
    }
    for (i, notice) in scan.manifest.notices.iter().enumerate() {
        lines.push(format!(
            "    {} {} {} ({})",
            format_index(i + 1),
            notice.date,
            notice.title,
            plural(notice.files.len(), "file")
        ));
    }
    for skipped in &scan.skipped {
        if let SkipReason::Failed(err) = &skipped.reason {
            lines.push(format!("    Skipped {}: {}", skipped.name, err));
        }
    }

    // Version
    lines.push(String::new());
    lines.push(stage_header("Version", &report.version_outcome, root));
    lines.push(format!("    {}", report.version.version));

    lines
}

/// Print the run report to stdout.
pub fn print_build_output(report: &BuildReport, root: &Path) {
    for line in format_build_output(report, root) {
        println!("{}", line);
    }
}
