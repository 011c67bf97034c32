//! Configuration types for the source walker

use std::path::PathBuf;

use crate::language::Language;

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Base directory; top-level directories are resolved against it
    pub root: PathBuf,
    /// Only yield files of this language (used by the detailed report)
    pub language: Option<Language>,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            language: None,
        }
    }
}
