//! Rendered report text
//!
//! Renderers build a [`Report`] line by line, tagging each line with a
//! [`LineStyle`]. The plain text (for the report file and tests) ignores the
//! styles; the console writer uses them for color.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::stats::format_number;

/// Visual role of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Plain,
    /// `=====` rules framing a section title
    Rule,
    /// Section titles such as `OVERALL TOTALS`
    Title,
    /// Language or subtotal labels inside a section
    Heading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub style: LineStyle,
    pub text: String,
}

/// A rendered report: lines joined with `'\n'`, no trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn push(&mut self, style: LineStyle, text: impl Into<String>) {
        self.lines.push(ReportLine {
            style,
            text: text.into(),
        });
    }

    pub fn plain(&mut self, text: impl Into<String>) {
        self.push(LineStyle::Plain, text);
    }

    pub fn blank(&mut self) {
        self.plain("");
    }

    /// A rule of `width` `=` characters after `indent`.
    pub fn rule(&mut self, indent: &str, width: usize) {
        self.push(LineStyle::Rule, format!("{}{}", indent, "=".repeat(width)));
    }

    /// Title framed by rules.
    pub fn banner(&mut self, title: &str, width: usize) {
        self.rule("", width);
        self.push(LineStyle::Title, title);
        self.rule("", width);
    }

    /// `label` followed by a number right-aligned in ten columns.
    pub fn count_line(&mut self, label: &str, value: usize) {
        self.plain(format!("{}{:>10}", label, format_number(value)));
    }

    pub fn extend(&mut self, other: Report) {
        self.lines.extend(other.lines);
    }

    /// Write the plain text to `path` as UTF-8.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string()).map_err(|source| ScanError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}
