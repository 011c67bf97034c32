//! Report rendering and display
//!
//! Renderers produce a [`Report`]: styled lines whose plain text is exactly
//! what gets written to the report file. The console writer adds color on top
//! of the same text.
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `text` - The `Report` line buffer and report file writing
//! - `report` - Summary report by top-level directory and language
//! - `detailed` - Per-file report for a single language
//! - `console` - Colored console output
//! - `json` - JSON output

mod config;
mod console;
mod detailed;
mod json;
mod report;
mod text;

pub use config::OutputConfig;
pub use console::{print_report, print_saved_path, write_report};
pub use detailed::{
    TOP_FILES_LIMIT, detailed_report_file_name, render_detailed, render_directory_breakdown,
    render_top_files,
};
pub use json::{print_json, summary_json};
pub use report::{REPORT_FILE_NAME, render_report};
pub use text::{LineStyle, Report, ReportLine};
