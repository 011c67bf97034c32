//! Line-count value types and the per-directory result table
//!
//! Counts flow upward: a [`FileLineCounts`] per file is folded into an
//! [`AggregateCounts`] keyed by (top-level directory, extension) inside the
//! [`ResultTable`]. Summaries by language and overall are derived on demand.

use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Line counts for a single file.
///
/// `total == code + comment + blank` holds for every value produced by the
/// counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileLineCounts {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl FileLineCounts {
    pub fn is_consistent(&self) -> bool {
        self.total == self.code + self.comment + self.blank
    }
}

/// Line counts summed over a group of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateCounts {
    pub files: usize,
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl AggregateCounts {
    /// Fold one file's counts in.
    pub fn add_file(&mut self, counts: &FileLineCounts) {
        self.files += 1;
        self.total += counts.total;
        self.code += counts.code;
        self.comment += counts.comment;
        self.blank += counts.blank;
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.code + self.comment + self.blank
    }
}

impl AddAssign for AggregateCounts {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

impl<'a> std::iter::Sum<&'a AggregateCounts> for AggregateCounts {
    fn sum<I: Iterator<Item = &'a AggregateCounts>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, c| {
            acc += *c;
            acc
        })
    }
}

/// Counts keyed by top-level directory, then by extension.
///
/// Both levels are ordered maps so iteration, and therefore every report
/// rendered from the table, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    dirs: BTreeMap<String, BTreeMap<String, AggregateCounts>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file under `(top_dir, ext)`.
    pub fn record(&mut self, top_dir: &str, ext: &str, counts: &FileLineCounts) {
        self.dirs
            .entry(top_dir.to_string())
            .or_default()
            .entry(ext.to_string())
            .or_default()
            .add_file(counts);
    }

    pub fn get(&self, top_dir: &str, ext: &str) -> Option<&AggregateCounts> {
        self.dirs.get(top_dir)?.get(ext)
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Top-level directories in lexicographic order.
    pub fn directories(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, AggregateCounts>)> {
        self.dirs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Counts per extension across all directories.
    pub fn by_language(&self) -> BTreeMap<String, AggregateCounts> {
        let mut totals: BTreeMap<String, AggregateCounts> = BTreeMap::new();
        for exts in self.dirs.values() {
            for (ext, counts) in exts {
                *totals.entry(ext.clone()).or_default() += *counts;
            }
        }
        totals
    }

    /// Counts summed over every directory and extension.
    pub fn overall(&self) -> AggregateCounts {
        self.dirs.values().flat_map(|exts| exts.values()).sum()
    }
}

/// Serializable snapshot of a scan, used for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary<'a> {
    pub directories: &'a ResultTable,
    pub languages: BTreeMap<String, AggregateCounts>,
    pub overall: AggregateCounts,
}

impl<'a> ScanSummary<'a> {
    pub fn new(table: &'a ResultTable) -> Self {
        Self {
            directories: table,
            languages: table.by_language(),
            overall: table.overall(),
        }
    }
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
