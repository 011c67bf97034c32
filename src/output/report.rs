//! Summary report: counts per top-level directory and per language

use crate::language::{directory_display_name, language_display_name};
use crate::stats::{AggregateCounts, ResultTable};

use super::text::{LineStyle, Report};

/// File name of the summary report, written under the scan root.
pub const REPORT_FILE_NAME: &str = "line_count_report.txt";

const WIDTH: usize = 100;

/// Render the summary report for a completed scan.
///
/// Sections, in order: title banner, one section per top-level directory
/// (lexicographic) with a subtotal, a summary per language across all
/// directories, and the overall totals. Languages are sorted by display name.
pub fn render_report(table: &ResultTable) -> Report {
    let mut report = Report::new();
    report.banner("CODE LINE COUNT ANALYSIS REPORT", WIDTH);
    report.blank();

    for (dir, exts) in table.directories() {
        report.blank();
        report.banner(
            &format!("DIRECTORY: {} ({})", directory_display_name(dir), dir),
            WIDTH,
        );
        report.blank();

        let mut dir_total = AggregateCounts::default();
        for (ext, counts) in sorted_by_display_name(exts.iter()) {
            push_language_block(&mut report, ext, counts);
            dir_total += *counts;
        }

        report.plain(format!("  {}", "-".repeat(50)));
        report.push(LineStyle::Heading, "  DIRECTORY TOTAL:");
        push_counts(&mut report, &dir_total);
        report.blank();
    }

    report.blank();
    report.banner("SUMMARY BY LANGUAGE (Across All Directories)", WIDTH);
    report.blank();

    let languages = table.by_language();
    for (ext, counts) in sorted_by_display_name(languages.iter()) {
        push_language_block(&mut report, ext, counts);
    }

    let overall = table.overall();
    report.banner("OVERALL TOTALS", WIDTH);
    report.count_line("  Total Files:         ", overall.files);
    report.count_line("  Total Lines:         ", overall.total);
    report.count_line("  Total Code Lines:    ", overall.code);
    report.count_line("  Total Comment Lines: ", overall.comment);
    report.count_line("  Total Blank Lines:   ", overall.blank);
    report.rule("", WIDTH);

    report
}

fn sorted_by_display_name<'a>(
    entries: impl Iterator<Item = (&'a String, &'a AggregateCounts)>,
) -> Vec<(&'a str, &'a AggregateCounts)> {
    let mut entries: Vec<_> = entries
        .map(|(ext, counts)| (language_display_name(ext), ext.as_str(), counts))
        .collect();
    entries.sort_by(|a, b| (&a.0, a.1).cmp(&(&b.0, b.1)));
    entries
        .into_iter()
        .map(|(_, ext, counts)| (ext, counts))
        .collect()
}

fn push_language_block(report: &mut Report, ext: &str, counts: &AggregateCounts) {
    report.push(
        LineStyle::Heading,
        format!("  {}:", language_display_name(ext)),
    );
    push_counts(report, counts);
    report.blank();
}

fn push_counts(report: &mut Report, counts: &AggregateCounts) {
    report.count_line("    Files:         ", counts.files);
    report.count_line("    Total Lines:   ", counts.total);
    report.count_line("    Code Lines:    ", counts.code);
    report.count_line("    Comment Lines: ", counts.comment);
    report.count_line("    Blank Lines:   ", counts.blank);
}
