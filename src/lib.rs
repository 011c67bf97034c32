//! Linecensus - line counts by top-level directory and language
//!
//! Every recognized source file below a root is classified line by line as
//! code, comment or blank, and the results are grouped by the file's
//! top-level directory and extension.

pub mod comments;
pub mod error;
pub mod file_utils;
pub mod language;
pub mod output;
pub mod scanner;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use comments::{count_file, count_lines};
pub use error::{Result, ScanError};
pub use language::Language;
pub use output::{OutputConfig, Report, print_json, print_report, render_detailed, render_report};
pub use scanner::{FileRecord, scan_directory, scan_files};
pub use stats::{AggregateCounts, FileLineCounts, ResultTable, ScanSummary};
pub use tree::{ScanConfig, SourceFile, SourceWalker};
