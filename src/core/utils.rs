//! Filesystem utilities shared by the scaffolding engine

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::core::error::Result;

/// Resolve a configured path string against an explicit project root.
///
/// Configuration values keep their original spelling (`./rest/controllers`)
/// because that exact string is reproduced into generated `require(...)`
/// lines; for filesystem access the leading `./` is stripped and relative
/// paths are joined onto the project root. Absolute paths are used as-is.
pub fn resolve_path(root: &Path, raw: &str) -> PathBuf {
    let trimmed = raw.strip_prefix("./").unwrap_or(raw);
    let path = Path::new(trimmed);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Insert `block` into `content` at the start of the line containing the
/// first occurrence of `anchor`.
///
/// `block` must end with a newline. When the anchor is missing the block is
/// appended at the end instead, after ensuring the existing content ends
/// with a newline, so generated files keep their managed lines even if a
/// hand edit removed the anchor.
pub fn splice_before(content: &str, anchor: &str, block: &str) -> String {
    match content.find(anchor) {
        Some(idx) => {
            let line_start = content[..idx].rfind('\n').map(|i| i + 1).unwrap_or(0);
            format!(
                "{}{}{}",
                &content[..line_start],
                block,
                &content[line_start..]
            )
        }
        None => {
            let mut merged = content.to_string();
            if !merged.is_empty() && !merged.ends_with('\n') {
                merged.push('\n');
            }
            merged.push_str(block);
            merged
        }
    }
}

/// Create a file with the given contents, failing the existence check
/// atomically.
///
/// Returns `Ok(true)` when the file was created, `Ok(false)` when a file
/// already exists at `path` (the file is left untouched). Uses a
/// create-exclusive open so concurrent creators cannot both succeed.
pub async fn create_exclusive(path: &Path, contents: &str) -> Result<bool> {
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(mut file) => {
            file.write_all(contents.as_bytes()).await?;
            file.flush().await?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_strips_leading_dot_slash() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_path(root, "./rest/controllers"),
            PathBuf::from("/project/rest/controllers")
        );
    }

    #[test]
    fn test_resolve_path_relative() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_path(root, "rest/models"),
            PathBuf::from("/project/rest/models")
        );
    }

    #[test]
    fn test_resolve_path_absolute_passthrough() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_path(root, "/srv/api/server.js"),
            PathBuf::from("/srv/api/server.js")
        );
    }

    #[test]
    fn test_splice_before_inserts_at_line_start() {
        let content = "first\nsecond\nthird\n";
        let merged = splice_before(content, "second", "inserted\n");
        assert_eq!(merged, "first\ninserted\nsecond\nthird\n");
    }

    #[test]
    fn test_splice_before_appends_when_anchor_missing() {
        let merged = splice_before("line without newline", "absent", "tail\n");
        assert_eq!(merged, "line without newline\ntail\n");
    }

    #[test]
    fn test_splice_before_anchor_on_first_line() {
        let merged = splice_before("anchor here\nrest\n", "anchor", "top\n");
        assert_eq!(merged, "top\nanchor here\nrest\n");
    }

    #[tokio::test]
    async fn test_create_exclusive_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.js");

        assert!(create_exclusive(&path, "first").await.unwrap());
        assert!(!create_exclusive(&path, "second").await.unwrap());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first");
    }
}
