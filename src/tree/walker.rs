//! SourceWalker - yields recognized source files below a base directory

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::warn;

use crate::file_utils::file_extension;
use crate::language::Language;

use super::config::ScanConfig;
use super::filter::is_excluded_dir;

/// A file the scanner should count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Lowercased extension, the key used in results
    pub extension: String,
    pub language: Language,
}

/// Walker over the files of a scan root.
///
/// Unlike a gitignore-aware walk, hidden files and ignore files have no
/// effect here: the only pruning is [`is_excluded_dir`]. Symlinked
/// directories are not followed; any other entry, including a dangling
/// symlink, is yielded when its extension is recognized.
pub struct SourceWalker {
    config: ScanConfig,
}

impl SourceWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Iterate recognized files in file-name order.
    pub fn files(&self) -> impl Iterator<Item = SourceFile> {
        let only = self.config.language;

        WalkBuilder::new(&self.config.root)
            .hidden(false)
            .ignore(false)
            .parents(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                // Never prune the root itself
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && is_excluded_dir(&entry.file_name().to_string_lossy()))
            })
            .build()
            .filter_map(|result| match result {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter_map(move |entry| {
                let path = entry.into_path();
                // Dangling symlinks stay in so their read failure is reported
                if path.is_dir() {
                    return None;
                }
                let extension = file_extension(&path);
                let language = Language::from_extension(&extension)?;
                if only.is_some_and(|l| l != language) {
                    return None;
                }
                Some(SourceFile {
                    path,
                    extension,
                    language,
                })
            })
    }
}
