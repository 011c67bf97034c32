//! Scanning a tree into line-count results
//!
//! A scan is strictly sequential: each file is read, counted and folded into
//! the results before the next one is opened. A file that cannot be read is
//! logged and counted as zero lines; it never aborts the scan.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::comments::count_file;
use crate::error::{Result, ScanError};
use crate::file_utils::{relative_path, top_level_dir};
use crate::language::Language;
use crate::stats::{FileLineCounts, ResultTable};
use crate::tree::{ScanConfig, SourceWalker};

/// Per-file result, kept for the detailed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative: PathBuf,
    pub counts: FileLineCounts,
}

/// Count every recognized file below `root`, grouped by top-level directory
/// and extension.
///
/// # Errors
///
/// Returns [`ScanError::PathNotFound`] if `root` does not exist. Unreadable
/// files are not errors.
pub fn scan_directory(root: impl AsRef<Path>) -> Result<ResultTable> {
    let root = root.as_ref();
    ensure_exists(root)?;

    info!(root = %root.display(), "scanning directory structure and counting lines");

    let walker = SourceWalker::new(ScanConfig::new(root));
    let mut table = ResultTable::new();

    for file in walker.files() {
        let counts = count_or_zero(&file.path, &file.extension);
        table.record(&top_level_dir(&file.path, root), &file.extension, &counts);
    }

    Ok(table)
}

/// Count every file of one language below `root`, keeping per-file results.
///
/// Files that cannot be read are logged and left out of the returned list.
pub fn scan_files(root: impl AsRef<Path>, language: Language) -> Result<Vec<FileRecord>> {
    let root = root.as_ref();
    ensure_exists(root)?;

    info!(
        root = %root.display(),
        language = language.name(),
        "scanning for files"
    );

    let walker = SourceWalker::new(ScanConfig::new(root).with_language(language));
    let mut records = Vec::new();

    for file in walker.files() {
        match count_file(&file.path, &file.extension) {
            Ok(counts) => {
                let relative = relative_path(&file.path, root);
                records.push(FileRecord {
                    path: file.path,
                    relative,
                    counts,
                });
            }
            Err(e) => error!(path = %file.path.display(), error = %e, "error reading file"),
        }
    }

    info!(count = records.len(), "found {} files", language.name());
    Ok(records)
}

/// Count one file, logging and returning zero counts if it cannot be read.
pub fn count_or_zero(path: &Path, ext: &str) -> FileLineCounts {
    count_file(path, ext).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "error reading file");
        FileLineCounts::default()
    })
}

fn ensure_exists(root: &Path) -> Result<()> {
    if root.exists() {
        Ok(())
    } else {
        Err(ScanError::PathNotFound(root.to_path_buf()))
    }
}
