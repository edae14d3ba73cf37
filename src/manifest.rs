//! Manifest serialization and atomic writes.
//!
//! Every manifest is pretty-printed with a 4-space indent and no trailing
//! newline, then written to a temporary file inside the output directory and
//! renamed over the destination. A crash mid-write leaves either the old
//! manifest or the new one, never a truncated file.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const MEDIA_FILENAME: &str = "media.json";
pub const OTHERS_FILENAME: &str = "others.json";
pub const NOTICE_FILENAME: &str = "notice.json";
pub const VERSION_FILENAME: &str = "version.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a value as 4-space indented JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Atomically write `value` as `<dir>/<file_name>`, returning the final path.
///
/// `dir` must already exist.
pub fn write_manifest<T: Serialize + ?Sized>(
    dir: &Path,
    file_name: &str,
    value: &T,
) -> Result<PathBuf, ManifestError> {
    let json = to_pretty_json(value)?;
    let path = dir.join(file_name);
    let io_err = |source| ManifestError::Io {
        path: path.clone(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp.write_all(&json).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(&path).map_err(|err| io_err(err.error))?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote manifest");
    Ok(path)
}
