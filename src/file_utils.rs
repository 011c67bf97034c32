//! Path classification and file reading helpers
//!
//! The scanner keys every result by two strings derived from the file path:
//! its lowercased extension and the first path segment below the scan root.

use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, ScanError};

/// Key used when a path has no segment below the scan root.
pub const ROOT_SENTINEL: &str = "root";

/// Lowercased extension without the leading dot, or `""` when there is none.
///
/// Dotfiles such as `.gitignore` have no extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use linecensus::file_utils::file_extension;
///
/// assert_eq!(file_extension(Path::new("src/Main.CS")), "cs");
/// assert_eq!(file_extension(Path::new("Makefile")), "");
/// ```
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// First segment of `path` relative to `root`.
///
/// Returns [`ROOT_SENTINEL`] when the relative path is empty or `path` is not
/// below `root`. A file directly inside the root resolves to its own name.
pub fn top_level_dir(path: &Path, root: &Path) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => return ROOT_SENTINEL.to_string(),
    };

    relative
        .components()
        .find_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().to_string()),
            _ => None,
        })
        .unwrap_or_else(|| ROOT_SENTINEL.to_string())
}

/// Path of `path` relative to `root`, or `path` itself when it is not below `root`.
pub fn relative_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Read a file as text, replacing invalid UTF-8 instead of failing.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("a/b/c.py")), "py");
        assert_eq!(file_extension(Path::new("FOO.PY")), "py");
        assert_eq!(file_extension(Path::new("archive.tar.GZ")), "gz");
        assert_eq!(file_extension(Path::new("README")), "");
        assert_eq!(file_extension(Path::new(".bashrc")), "");
    }

    #[test]
    fn test_top_level_dir() {
        let root = Path::new("/repo");
        assert_eq!(top_level_dir(Path::new("/repo/api/src/a.cs"), root), "api");
        assert_eq!(top_level_dir(Path::new("/repo/web/index.html"), root), "web");
        // Files directly in the root resolve to their own name
        assert_eq!(top_level_dir(Path::new("/repo/setup.py"), root), "setup.py");
    }

    #[test]
    fn test_top_level_dir_degenerate() {
        let root = Path::new("/repo");
        assert_eq!(top_level_dir(Path::new("/repo"), root), ROOT_SENTINEL);
        assert_eq!(top_level_dir(Path::new("/elsewhere/x.js"), root), ROOT_SENTINEL);
    }

    #[test]
    fn test_relative_path() {
        let root = PathBuf::from("/repo");
        assert_eq!(
            relative_path(Path::new("/repo/a/b.cs"), &root),
            Path::new("a").join("b.cs")
        );
        assert_eq!(
            relative_path(Path::new("/other/c.cs"), &root),
            PathBuf::from("/other/c.cs")
        );
    }

    #[test]
    fn test_read_text_lossy_valid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.js");
        fs::write(&path, "let x = 1;\n").unwrap();
        assert_eq!(read_text_lossy(&path).unwrap(), "let x = 1;\n");
    }

    #[test]
    fn test_read_text_lossy_invalid_bytes_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.py");
        fs::write(&path, b"x = 1\n\xff\xfe\ny = 2\n").unwrap();

        let text = read_text_lossy(&path).unwrap();
        assert_eq!(text.split('\n').count(), 4);
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_normalize_newlines() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed("a\nb")));
        assert_eq!(normalize_newlines("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_newlines("a\rb\rc"), "a\nb\nc");
        assert_eq!(normalize_newlines("a\r\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_read_text_lossy_missing_file() {
        let result = read_text_lossy(Path::new("/nonexistent/file.cs"));
        match result {
            Err(ScanError::FileRead { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/file.cs"));
            }
            other => panic!("Expected FileRead error, got {:?}", other),
        }
    }
}
