//! Detailed per-file report for a single language
//!
//! Files are arranged into their directory hierarchy. Every directory shows
//! totals for everything beneath it, then its own files ranked by code lines,
//! then its subdirectories. A second section ranks the largest files overall.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::Component;

use crate::language::Language;
use crate::scanner::FileRecord;
use crate::stats::{AggregateCounts, FileLineCounts, format_number};

use super::text::{LineStyle, Report};

const WIDTH: usize = 120;

/// Number of files listed in the ranking section.
pub const TOP_FILES_LIMIT: usize = 50;

/// Name shown for files that sit directly in the scan root.
const ROOT_SECTION: &str = "(root)";

/// File name of the detailed report for `language`, written under the scan root.
pub fn detailed_report_file_name(language: Language) -> String {
    format!("{}_detailed_report.txt", language.slug())
}

#[derive(Debug, Default)]
struct DirNode {
    files: Vec<(String, FileLineCounts)>,
    children: BTreeMap<String, DirNode>,
    totals: AggregateCounts,
}

impl DirNode {
    fn insert(&mut self, dirs: &[String], name: String, counts: FileLineCounts) {
        match dirs.split_first() {
            None => self.files.push((name, counts)),
            Some((first, rest)) => {
                let child = self.children.entry(first.clone()).or_default();
                child.totals.add_file(&counts);
                child.insert(rest, name, counts);
            }
        }
    }
}

fn build_tree(records: &[FileRecord]) -> DirNode {
    let mut root = DirNode::default();

    for record in records {
        let mut parts: Vec<String> = record
            .relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();
        let Some(name) = parts.pop() else {
            continue;
        };
        root.totals.add_file(&record.counts);
        root.insert(&parts, name, record.counts);
    }

    root
}

/// Render the directory breakdown followed by the largest-files ranking.
pub fn render_detailed(records: &[FileRecord], language: Language) -> Report {
    let mut report = render_directory_breakdown(records, language);
    report.blank();
    report.extend(render_top_files(records, language));
    report
}

/// Directory-by-directory breakdown with per-file lines and overall totals.
pub fn render_directory_breakdown(records: &[FileRecord], language: Language) -> Report {
    let tree = build_tree(records);
    let lang = language.name();

    let mut report = Report::new();
    report.banner(
        &format!("DETAILED {} CODE ANALYSIS BY DIRECTORY AND FILE", lang),
        WIDTH,
    );
    report.blank();

    if !tree.files.is_empty() {
        let mut root_totals = AggregateCounts::default();
        for (_, counts) in &tree.files {
            root_totals.add_file(counts);
        }
        let root_section = DirNode {
            files: tree.files.clone(),
            children: BTreeMap::new(),
            totals: root_totals,
        };
        push_directory(&mut report, &root_section, ROOT_SECTION, 0);
    }

    for (name, node) in &tree.children {
        push_directory(&mut report, node, name, 0);
    }

    let overall = tree.totals;
    report.blank();
    report.banner(&format!("OVERALL {} TOTALS", lang), WIDTH);
    report.count_line("Total Files:         ", overall.files);
    report.count_line("Total Lines:         ", overall.total);
    report.count_line("Total Code Lines:    ", overall.code);
    report.count_line("Total Comment Lines: ", overall.comment);
    report.count_line("Total Blank Lines:   ", overall.blank);
    report.rule("", WIDTH);

    report
}

fn push_directory(report: &mut Report, node: &DirNode, name: &str, depth: usize) {
    let prefix = "  ".repeat(depth);
    let totals = &node.totals;

    report.rule(&prefix, WIDTH.saturating_sub(depth * 2));
    report.push(LineStyle::Title, format!("{}DIRECTORY: {}", prefix, name));
    report.plain(format!(
        "{}Files: {} | Total: {} | Code: {} | Comments: {} | Blank: {}",
        prefix,
        totals.files,
        format_number(totals.total),
        format_number(totals.code),
        format_number(totals.comment),
        format_number(totals.blank),
    ));
    report.rule(&prefix, WIDTH.saturating_sub(depth * 2));
    report.blank();

    if !node.files.is_empty() {
        let mut files: Vec<_> = node.files.iter().collect();
        files.sort_by_key(|(_, counts)| Reverse(counts.code));

        report.push(
            LineStyle::Heading,
            format!("{}  FILES IN THIS DIRECTORY:", prefix),
        );
        report.plain(format!(
            "{}  {}",
            prefix,
            "-".repeat(115usize.saturating_sub(depth * 2))
        ));
        for (file_name, counts) in files {
            report.plain(format!(
                "{}    {:<60} | Total: {:>8} | Code: {:>8} | Cmts: {:>8} | Blank: {:>8}",
                prefix,
                file_name,
                format_number(counts.total),
                format_number(counts.code),
                format_number(counts.comment),
                format_number(counts.blank),
            ));
        }
        report.blank();
    }

    for (child_name, child) in &node.children {
        push_directory(report, child, child_name, depth + 1);
    }
}

/// Ranking of the largest files by code lines.
pub fn render_top_files(records: &[FileRecord], language: Language) -> Report {
    let mut ranked: Vec<&FileRecord> = records.iter().collect();
    ranked.sort_by_key(|r| Reverse(r.counts.code));

    let mut report = Report::new();
    report.blank();
    report.banner(
        &format!(
            "TOP {} LARGEST {} FILES BY CODE LINES",
            TOP_FILES_LIMIT,
            language.name()
        ),
        WIDTH,
    );
    report.blank();

    for (index, record) in ranked.into_iter().take(TOP_FILES_LIMIT).enumerate() {
        report.push(
            LineStyle::Heading,
            format!("{:>3}. {}", index + 1, record.relative.display()),
        );
        report.plain(format!(
            "     Total: {:>8} | Code: {:>8} | Comments: {:>8} | Blank: {:>8}",
            format_number(record.counts.total),
            format_number(record.counts.code),
            format_number(record.counts.comment),
            format_number(record.counts.blank),
        ));
        report.blank();
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(rel: &str, total: usize, code: usize, comment: usize, blank: usize) -> FileRecord {
        let relative: PathBuf = rel.split('/').collect();
        FileRecord {
            path: PathBuf::from("/base").join(&relative),
            relative,
            counts: FileLineCounts {
                total,
                code,
                comment,
                blank,
            },
        }
    }

    fn sample() -> Vec<FileRecord> {
        vec![
            record("api/Controllers/Home.cs", 10, 8, 1, 1),
            record("api/Program.cs", 5, 3, 1, 1),
            record("api/Startup.cs", 1500, 1200, 200, 100),
            record("lib/Util.cs", 2, 2, 0, 0),
        ]
    }

    #[test]
    fn test_tree_totals_roll_up() {
        let tree = build_tree(&sample());

        assert_eq!(tree.totals.files, 4);
        assert_eq!(tree.totals.total, 1517);

        let api = &tree.children["api"];
        assert_eq!(api.totals.files, 3);
        assert_eq!(api.totals.code, 1211);
        assert_eq!(api.files.len(), 2);
        assert_eq!(api.children["Controllers"].totals.files, 1);
    }

    #[test]
    fn test_directory_header_and_nesting() {
        let text = render_directory_breakdown(&sample(), Language::CSharp).to_string();

        assert!(text.starts_with(&format!(
            "{rule}\nDETAILED C# CODE ANALYSIS BY DIRECTORY AND FILE\n{rule}\n\n",
            rule = "=".repeat(120)
        )));
        assert!(text.contains(
            "DIRECTORY: api\nFiles: 3 | Total: 1,515 | Code: 1,211 | Comments: 202 | Blank: 102"
        ));
        assert!(text.contains(&format!(
            "  {}\n  DIRECTORY: Controllers\n  Files: 1 | Total: 10 | Code: 8 | Comments: 1 | Blank: 1",
            "=".repeat(118)
        )));
    }

    #[test]
    fn test_files_sorted_by_code_descending() {
        let text = render_directory_breakdown(&sample(), Language::CSharp).to_string();

        let startup = text.find("    Startup.cs").unwrap();
        let program = text.find("    Program.cs").unwrap();
        assert!(startup < program);
        assert!(text.contains(&format!(
            "    {:<60} | Total:    1,500 | Code:    1,200 | Cmts:      200 | Blank:      100",
            "Startup.cs"
        )));
    }

    #[test]
    fn test_root_level_files_get_own_section() {
        let records = vec![record("Root.cs", 1, 1, 0, 0), record("a/B.cs", 1, 1, 0, 0)];
        let text = render_directory_breakdown(&records, Language::CSharp).to_string();

        let root = text.find("DIRECTORY: (root)").unwrap();
        let a = text.find("DIRECTORY: a").unwrap();
        assert!(root < a);
        assert!(text.contains("Total Files:                  2"));
    }

    #[test]
    fn test_top_files_ranking() {
        let text = render_top_files(&sample(), Language::CSharp).to_string();

        assert!(text.contains("TOP 50 LARGEST C# FILES BY CODE LINES"));
        let first = format!("  1. {}", PathBuf::from("api").join("Startup.cs").display());
        assert!(text.contains(&first), "{}", text);
        assert!(text.contains(
            "     Total:    1,500 | Code:    1,200 | Comments:      200 | Blank:      100"
        ));
        assert!(text.contains(&format!(
            "  3. {}",
            PathBuf::from("api").join("Program.cs").display()
        )));
    }

    #[test]
    fn test_top_files_limit() {
        let records: Vec<_> = (0..60)
            .map(|i| record(&format!("d/F{:02}.cs", i), i, i, 0, 0))
            .collect();
        let text = render_top_files(&records, Language::CSharp).to_string();

        assert!(text.contains(" 50. "));
        assert!(!text.contains(" 51. "));
    }

    #[test]
    fn test_combined_report_separator() {
        let text = render_detailed(&sample(), Language::CSharp).to_string();
        let rule = "=".repeat(120);
        assert!(text.contains(&format!("{rule}\n\n\n{rule}\nTOP 50 LARGEST")));
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            detailed_report_file_name(Language::CSharp),
            "csharp_detailed_report.txt"
        );
        assert_eq!(
            detailed_report_file_name(Language::Python),
            "python_detailed_report.txt"
        );
    }
}
