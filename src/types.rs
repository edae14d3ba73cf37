//! Manifest types serialized into the output directory.
//!
//! These are the contract with the front-end: field names and nesting must
//! stay exactly as documented on each type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `media.json`: `{"images": {<subfolder>: [<relative path>, ...]}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaManifest {
    pub images: IndexMap<String, Vec<String>>,
}

/// `others.json`: `{<base name>: <relative path>}`, a flat object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OthersManifest {
    pub entries: IndexMap<String, String>,
}

/// `notice.json`: `{"notices": [...]}`, newest folder first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoticeManifest {
    pub notices: Vec<Notice>,
}

/// One dated notice folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Title with spaces replaced by hyphens (`New-Policy`)
    pub id: String,
    /// `YYYY-MM-DD` from the folder's date prefix
    pub date: String,
    /// Folder title with underscores as spaces (`New Policy`)
    pub title: String,
    pub files: Vec<NoticeFile>,
}

/// A file attached to a notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeFile {
    /// Title-cased notice title, shared by every file of the notice
    pub file_name: String,
    /// Lowercase extension without the dot; empty when the file has none
    pub file_type: String,
    pub file_path: String,
}

/// `version.json`: `{"version": N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionStamp {
    pub version: u64,
}
