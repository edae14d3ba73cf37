//! Single-level directory listings in the order every indexer consumes them.
//!
//! All stages enumerate a directory's immediate children sorted
//! **descending** by file name (byte order, which for UTF-8 names is code
//! point order). Symlinks are followed, so a link to a directory counts as
//! a directory and a link to a file as a file; dangling links are dropped.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_file: bool,
}

/// List the children of `dir`, descending by name.
///
/// Fails only if `dir` itself cannot be read. Unreadable children and names
/// that are not valid UTF-8 are skipped with a log line.
pub fn list_descending(dir: &Path) -> Result<Vec<Entry>, walkdir::Error> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by(|a, b| b.file_name().cmp(a.file_name()));

    let mut entries = Vec::new();
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        let file_type = entry.file_type();
        entries.push(Entry {
            name: name.to_string(),
            path: entry.path().to_path_buf(),
            is_dir: file_type.is_dir(),
            is_file: file_type.is_file(),
        });
    }
    Ok(entries)
}

/// Join path segments with forward slashes, whatever the host separator.
///
/// The first segment is a configured directory (possibly `a/b` or `a\b`);
/// its separators are normalized too.
pub fn slash_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| s.replace('\\', "/"))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn children_are_listed_descending() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.jpg"), "").unwrap();
        fs::write(tmp.path().join("a.jpg"), "").unwrap();
        fs::create_dir(tmp.path().join("c")).unwrap();

        let names: Vec<String> = list_descending(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["c", "b.jpg", "a.jpg"]);
    }

    #[test]
    fn lowercase_names_come_first_when_descending() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Zebra.png"), "").unwrap();
        fs::write(tmp.path().join("apple.png"), "").unwrap();

        let names: Vec<String> = list_descending(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["apple.png", "Zebra.png"]);
    }

    #[test]
    fn file_and_dir_flags_are_set() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let entries = list_descending(tmp.path()).unwrap();
        let sub = entries.iter().find(|e| e.name == "sub").unwrap();
        let file = entries.iter().find(|e| e.name == "file.txt").unwrap();
        assert!(sub.is_dir && !sub.is_file);
        assert!(file.is_file && !file.is_dir);
    }

    #[test]
    fn nested_children_are_not_listed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/inner.jpg"), "").unwrap();

        let entries = list_descending(tmp.path()).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(list_descending(&tmp.path().join("absent")).is_err());
    }

    #[test]
    fn slash_path_normalizes_separators() {
        assert_eq!(slash_path(&["media", "2024", "a.jpg"]), "media/2024/a.jpg");
        assert_eq!(slash_path(&["site\\media", "a.jpg"]), "site/media/a.jpg");
    }
}
