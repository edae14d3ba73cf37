//! Index configuration module.
//!
//! Handles loading, validating, and merging `index.toml`. The file is
//! optional: without it the indexer reads `media/`, `others/` and `notice/`
//! from the content root and writes manifests to `database/`.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── index.toml       # Optional, overrides stock defaults
//! ├── media/
//! ├── others/
//! ├── notice/
//! └── database/        # Written by the indexer
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "database"   # Where manifests are written
//! media_dir = "media"       # Subfolders of images → media.json
//! others_dir = "others"     # Flat media files → others.json
//! notice_dir = "notice"     # Dated notice folders → notice.json
//!
//! [extensions]
//! images = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"]
//! videos = [".mp4", ".mov", ".avi", ".mkv", ".webm", ".flv"]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! notice_dir = "announcements"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::extensions::ExtensionSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the config file looked up in the content root.
pub const CONFIG_FILENAME: &str = "index.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Indexer configuration loaded from `index.toml`.
///
/// Directory values are relative to the content root and double as the
/// prefix of every relative path written into the manifests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Directory receiving the JSON manifests (created if absent).
    pub output_dir: String,
    /// Directory of image subfolders indexed into `media.json`.
    pub media_dir: String,
    /// Flat directory of media files indexed into `others.json`.
    pub others_dir: String,
    /// Directory of `YYYYMMDD-Title` folders indexed into `notice.json`.
    pub notice_dir: String,
    /// Recognized image and video extensions.
    pub extensions: ExtensionSet,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output_dir: "database".to_string(),
            media_dir: "media".to_string(),
            others_dir: "others".to_string(),
            notice_dir: "notice".to_string(),
            extensions: ExtensionSet::default(),
        }
    }
}

impl IndexConfig {
    /// Validate directory names and extension lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dirs = [
            ("output_dir", &self.output_dir),
            ("media_dir", &self.media_dir),
            ("others_dir", &self.others_dir),
            ("notice_dir", &self.notice_dir),
        ];
        for (key, dir) in dirs {
            check_relative_dir(key, dir)?;
        }
        for (key, dir) in &dirs[1..] {
            if *dir == &self.output_dir {
                return Err(ConfigError::Validation(format!(
                    "{key} must differ from output_dir"
                )));
            }
        }
        self.extensions.check().map_err(ConfigError::Validation)
    }
}

/// A directory value must be a non-empty relative path that stays inside the root.
fn check_relative_dir(key: &str, dir: &str) -> Result<(), ConfigError> {
    if dir.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    let escapes = Path::new(dir)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ConfigError::Validation(format!(
            "{key} must be a relative path inside the content root, got {dir:?}"
        )));
    }
    Ok(())
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IndexConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `images` list in the overlay replaces the stock list rather than extending it.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IndexConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `index.toml` from the content root, falling back to stock defaults.
pub fn load_config(root: &Path) -> Result<IndexConfig, ConfigError> {
    load_config_file(&root.join(CONFIG_FILENAME))
}

/// Load a config from an explicit file path, falling back to stock defaults
/// when the file doesn't exist.
pub fn load_config_file(path: &Path) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `index.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Content Index Configuration
# ===========================
# Place this file as index.toml in the content root. Every key is optional;
# omitted keys keep the values shown here. Unknown keys are rejected.

# Directory receiving media.json, others.json, notice.json and version.json.
# Created if absent.
output_dir = "database"

# Subfolders of images. Each subfolder with at least one image becomes a key
# in media.json listing its image paths.
media_dir = "media"

# Flat directory of images and videos. Each file becomes an entry in
# others.json keyed by its name without extension.
others_dir = "others"

# Folders named YYYYMMDD-Title_Words. Each folder with at least one file
# becomes a record in notice.json. Folders whose date part is not eight
# digits forming a plausible date are skipped with a warning.
notice_dir = "notice"

[extensions]
# Lowercase, dot-prefixed. Matching is case-insensitive. The two lists must
# not overlap. Setting a list replaces the stock list entirely.
images = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"]
videos = [".mp4", ".mov", ".avi", ".mkv", ".webm", ".flv"]
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_stock_directories() {
        let config = IndexConfig::default();
        assert_eq!(config.output_dir, "database");
        assert_eq!(config.media_dir, "media");
        assert_eq!(config.others_dir, "others");
        assert_eq!(config.notice_dir, "notice");
    }

    #[test]
    fn parse_partial_config() {
        let config: IndexConfig = toml::from_str(r#"notice_dir = "announcements""#).unwrap();
        assert_eq!(config.notice_dir, "announcements");
        assert_eq!(config.media_dir, "media");
        assert_eq!(config.extensions, ExtensionSet::default());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, IndexConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r#"
output_dir = "public/data"

[extensions]
videos = [".mp4"]
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.output_dir, "public/data");
        assert_eq!(config.extensions.videos, vec![".mp4"]);
        // Sibling list untouched by the overlay
        assert_eq!(config.extensions.images.len(), 7);
    }

    #[test]
    fn load_config_file_uses_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("elsewhere.toml");
        fs::write(&path, r#"media_dir = "gallery""#).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.media_dir, "gallery");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), r#"media_folder = "x""#).unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn empty_directory_rejected() {
        let config = IndexConfig {
            media_dir: " ".to_string(),
            ..IndexConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn escaping_directory_rejected() {
        let config = IndexConfig {
            output_dir: "../database".to_string(),
            ..IndexConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("output_dir"));
    }

    #[test]
    fn source_equal_to_output_rejected() {
        let config = IndexConfig {
            others_dir: "database".to_string(),
            ..IndexConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("others_dir must differ from output_dir"));
    }

    #[test]
    fn overlapping_extensions_rejected_on_load() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            r#"
[extensions]
videos = [".gif"]
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"a = "1""#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"a = "2""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_str(), Some("2"));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[extensions]
images = [".jpg"]
videos = [".mp4"]
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[extensions]
images = [".png", ".gif"]
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let images = merged["extensions"]["images"].as_array().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(merged["extensions"]["videos"][0].as_str(), Some(".mp4"));
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let config: IndexConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, IndexConfig::default());
    }
}
