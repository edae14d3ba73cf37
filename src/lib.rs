//! # Content Index
//!
//! Build-time manifest writer for a static content site. The filesystem is
//! the data source: image folders, loose media files and dated notice folders
//! become JSON listings a front-end fetches at runtime.
//!
//! # Architecture: Four Independent Stages
//!
//! ```text
//! 1. Media    media/<folder>/<image>      →  database/media.json
//! 2. Others   others/<file>               →  database/others.json
//! 3. Notice   notice/<YYYYMMDD-Title>/*   →  database/notice.json
//! 4. Version  database/version.json       →  database/version.json (N + 1)
//! ```
//!
//! Stages share nothing but the output directory and the extension lists.
//! Every run rescans from scratch and rewrites each manifest in full; the
//! version counter is the only state carried between runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | One scanner per source directory, producing manifests without writing |
//! | [`pipeline`] | Runs the four stages in order and reports what each did |
//! | [`version`] | Reads and bumps `version.json` |
//! | [`manifest`] | 4-space pretty JSON and atomic temp-file-plus-rename writes |
//! | [`config`] | Optional `index.toml` merged over stock defaults |
//! | [`extensions`] | Image/video extension classification |
//! | [`naming`] | `YYYYMMDD-Title_Words` notice folder name parser |
//! | [`listing`] | Descending single-level directory listings |
//! | [`types`] | Manifest types serialized for the front-end |
//! | [`output`] | CLI output formatting of a run |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Ordering
//!
//! Directories are always enumerated descending by name. The media and
//! others manifests are then reversed, so their keys read ascending, while
//! notices stay descending: date-prefixed folder names put the newest notice
//! first. Insertion-ordered maps (`indexmap`) carry that order into the JSON.
//!
//! ## Missing Sources
//!
//! A missing `media/` or `others/` directory leaves the previous manifest in
//! place; a missing `notice/` directory still writes `{"notices": []}`.
//!
//! ## Atomic Writes
//!
//! Manifests are written to a temporary file next to their destination and
//! renamed into place, so a reader never sees half a file.

pub mod config;
pub mod extensions;
pub mod listing;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod types;
pub mod version;

#[cfg(test)]
pub(crate) mod test_helpers;
