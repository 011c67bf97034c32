//! Source tree traversal
//!
//! Walks a base directory in file-name order, prunes build and dependency
//! directories, and yields every file with a recognized extension.

mod config;
mod filter;
mod walker;

// Re-export public types
pub use config::ScanConfig;
pub use filter::{EXCLUDED_DIRS, is_excluded_dir};
pub use walker::{SourceFile, SourceWalker};
