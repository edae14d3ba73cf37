//! Manifest version counter.
//!
//! `version.json` holds `{"version": N}` and is bumped on every build so the
//! front-end can tell a fresh index from a cached one. Rules:
//!
//! - no file yet → write `0`
//! - file present, `version` missing or `null` → write `1`
//! - file present with integer `N` → write `N + 1`
//! - anything else (invalid JSON, not an object, non-integer or negative
//!   `version`) → error, the build aborts

use crate::manifest::{self, ManifestError, VERSION_FILENAME};
use crate::types::VersionStamp;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} must contain a JSON object")]
    NotAnObject { path: PathBuf },
    #[error("\"version\" in {path} must be a non-negative integer, found {found}")]
    InvalidVersion { path: PathBuf, found: String },
    #[error(transparent)]
    Write(#[from] ManifestError),
}

/// Compute the version the next build would write, without writing it.
pub fn next_version(output_dir: &Path) -> Result<VersionStamp, VersionError> {
    let path = output_dir.join(VERSION_FILENAME);
    let version = match read_previous(&path)? {
        None => 0,
        Some(previous) => previous.checked_add(1).ok_or_else(|| VersionError::InvalidVersion {
            path: path.clone(),
            found: previous.to_string(),
        })?,
    };
    Ok(VersionStamp { version })
}

/// Bump the counter in `<output_dir>/version.json` and return the new value.
pub fn stamp_version(output_dir: &Path) -> Result<(VersionStamp, PathBuf), VersionError> {
    let stamp = next_version(output_dir)?;
    let path = manifest::write_manifest(output_dir, VERSION_FILENAME, &stamp)?;
    tracing::info!(version = stamp.version, "version stamped");
    Ok((stamp, path))
}

/// Read the stored version. `None` when the file doesn't exist; a missing or
/// null `version` field reads as `Some(0)`.
fn read_previous(path: &Path) -> Result<Option<u64>, VersionError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| VersionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&content).map_err(|source| VersionError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Object(fields) = data else {
        return Err(VersionError::NotAnObject {
            path: path.to_path_buf(),
        });
    };
    match fields.get("version") {
        None | Some(Value::Null) => Ok(Some(0)),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| VersionError::InvalidVersion {
                path: path.to_path_buf(),
                found: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_version_file(dir: &Path, content: &str) {
        fs::write(dir.join(VERSION_FILENAME), content).unwrap();
    }

    #[test]
    fn first_stamp_writes_zero() {
        let tmp = TempDir::new().unwrap();
        let (stamp, path) = stamp_version(tmp.path()).unwrap();
        assert_eq!(stamp.version, 0);
        assert_eq!(fs::read_to_string(path).unwrap(), "{\n    \"version\": 0\n}");
    }

    #[test]
    fn second_stamp_writes_one() {
        let tmp = TempDir::new().unwrap();
        stamp_version(tmp.path()).unwrap();
        let (stamp, _) = stamp_version(tmp.path()).unwrap();
        assert_eq!(stamp.version, 1);
    }

    #[test]
    fn existing_version_is_incremented() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), r#"{"version": 41}"#);
        let (stamp, _) = stamp_version(tmp.path()).unwrap();
        assert_eq!(stamp.version, 42);
    }

    #[test]
    fn missing_field_counts_as_zero() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), r#"{"built": "yesterday"}"#);
        assert_eq!(next_version(tmp.path()).unwrap().version, 1);
    }

    #[test]
    fn null_field_counts_as_zero() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), r#"{"version": null}"#);
        assert_eq!(next_version(tmp.path()).unwrap().version, 1);
    }

    #[test]
    fn next_version_does_not_write() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), r#"{"version": 5}"#);
        assert_eq!(next_version(tmp.path()).unwrap().version, 6);
        assert_eq!(
            fs::read_to_string(tmp.path().join(VERSION_FILENAME)).unwrap(),
            r#"{"version": 5}"#
        );
    }

    #[test]
    fn invalid_json_is_error() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), "{\"version\": ");
        assert!(matches!(
            next_version(tmp.path()),
            Err(VersionError::Json { .. })
        ));
    }

    #[test]
    fn non_object_is_error() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), "[1, 2]");
        assert!(matches!(
            next_version(tmp.path()),
            Err(VersionError::NotAnObject { .. })
        ));
    }

    #[test]
    fn string_version_is_error() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), r#"{"version": "3"}"#);
        let err = next_version(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("found \"3\""));
    }

    #[test]
    fn negative_and_fractional_versions_are_errors() {
        let tmp = TempDir::new().unwrap();
        write_version_file(tmp.path(), r#"{"version": -1}"#);
        assert!(matches!(
            next_version(tmp.path()),
            Err(VersionError::InvalidVersion { .. })
        ));
        write_version_file(tmp.path(), r#"{"version": 2.5}"#);
        assert!(matches!(
            next_version(tmp.path()),
            Err(VersionError::InvalidVersion { .. })
        ));
    }
}
