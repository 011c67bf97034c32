//! Comment-aware line counting
//!
//! Lines are classified as code, comment or blank using the regular
//! expressions from the language table. The classification is deliberately
//! approximate:
//!
//! - Multi-line patterns are stripped from the whole content first. The
//!   number of lines that disappear (the *multi-line deficit*) is added to
//!   the comment count. The line the block collapses into is classified like
//!   any other remaining line.
//! - A single-line pattern only counts when it matches at the start of the
//!   trimmed line, so `x = 1  # note` is code.
//! - String literals are not recognized; `"/* not a comment */"` is stripped
//!   like a real comment.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::file_utils::{normalize_newlines, read_text_lossy};
use crate::language::{CommentKind, CommentPattern, Language};
use crate::stats::FileLineCounts;

/// Compiled form of one language's comment patterns.
struct CompiledPatterns {
    /// Anchored at the start of a trimmed line
    single: Vec<Regex>,
    /// Applied to the whole content, in table order
    multi: Vec<Regex>,
}

impl CompiledPatterns {
    fn compile(patterns: &[CommentPattern]) -> Self {
        let mut single = Vec::new();
        let mut multi = Vec::new();

        for pattern in patterns {
            match pattern.kind {
                CommentKind::SingleLine => single.push(
                    Regex::new(&format!("^(?:{})", pattern.source))
                        .expect("single-line comment pattern is invalid"),
                ),
                CommentKind::MultiLine => multi.push(
                    Regex::new(pattern.source).expect("multi-line comment pattern is invalid"),
                ),
            }
        }

        Self { single, multi }
    }
}

static COMPILED_PATTERNS: LazyLock<HashMap<Language, CompiledPatterns>> = LazyLock::new(|| {
    Language::ALL
        .iter()
        .map(|lang| (*lang, CompiledPatterns::compile(lang.comment_patterns())))
        .collect()
});

/// Count total, code, comment and blank lines in `content`.
///
/// `ext` selects the pattern set; unrecognized extensions have no comment
/// syntax, so every non-blank line is code. `\r\n` and lone `\r` are read
/// as `\n`. Lines are the pieces between `'\n'` characters: a trailing
/// newline produces a final empty line and an empty file is one blank line.
///
/// # Examples
///
/// ```
/// use linecensus::comments::count_lines;
///
/// let counts = count_lines("// setup\nrun();\n", "js");
/// assert_eq!(counts.comment, 1);
/// assert_eq!(counts.code, 1);
/// assert_eq!(counts.blank, 1);
/// assert_eq!(counts.total, 3);
/// ```
pub fn count_lines(content: &str, ext: &str) -> FileLineCounts {
    let patterns = Language::from_extension(ext).and_then(|lang| COMPILED_PATTERNS.get(&lang));

    let content = normalize_newlines(content);
    let total = content.split('\n').count();

    let mut stripped = content.into_owned();
    if let Some(p) = patterns {
        for regex in &p.multi {
            stripped = regex.replace_all(&stripped, "").into_owned();
        }
    }

    let mut counts = FileLineCounts {
        total,
        ..Default::default()
    };

    let mut remaining = 0;
    for line in stripped.split('\n') {
        remaining += 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            counts.blank += 1;
        } else if patterns.is_some_and(|p| p.single.iter().any(|r| r.is_match(trimmed))) {
            counts.comment += 1;
        } else {
            counts.code += 1;
        }
    }

    // Stripping never adds newlines, so the deficit cannot go negative
    counts.comment += total.saturating_sub(remaining);
    counts
}

/// Read `path` and count its lines using the pattern set for `ext`.
pub fn count_file(path: &Path, ext: &str) -> Result<FileLineCounts> {
    let content = read_text_lossy(path)?;
    Ok(count_lines(&content, ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn c(total: usize, code: usize, comment: usize, blank: usize) -> FileLineCounts {
        FileLineCounts {
            total,
            code,
            comment,
            blank,
        }
    }

    #[test]
    fn test_single_line_comments_js() {
        // The trailing newline yields a final empty line
        assert_eq!(count_lines("// a\ncode();\n// b\n", "js"), c(4, 1, 2, 1));
        assert_eq!(count_lines("// a\ncode();\n// b", "js"), c(3, 1, 2, 0));
    }

    #[test]
    fn test_block_comment_deficit() {
        // Three lines collapse into one empty line: deficit of 2
        assert_eq!(count_lines("/* x\ny\nz */\n", "js"), c(4, 0, 2, 2));
        assert_eq!(count_lines("/* x\ny\nz */", "js"), c(3, 0, 2, 1));
    }

    #[test]
    fn test_block_comment_sharing_line_with_code() {
        // The surviving line is code, the rest of the block is deficit
        assert_eq!(count_lines("int a; /* start\nend */ int b;", "cs"), c(2, 1, 1, 0));
    }

    #[test]
    fn test_trailing_comment_is_code() {
        assert_eq!(count_lines("let x = 1; // note", "ts"), c(1, 1, 0, 0));
        assert_eq!(count_lines("x = 1  # note", "py"), c(1, 1, 0, 0));
    }

    #[test]
    fn test_indented_comment_is_comment() {
        assert_eq!(count_lines("    // indented\n\t# not js", "js"), c(2, 1, 1, 0));
    }

    #[test]
    fn test_json_all_blank() {
        for n in 1..6 {
            let content = vec!["  "; n].join("\n");
            assert_eq!(count_lines(&content, "json"), c(n, 0, 0, n));
        }
    }

    #[test]
    fn test_json_has_no_comments() {
        assert_eq!(count_lines("// nope\n{\"a\": 1}", "json"), c(2, 2, 0, 0));
    }

    #[test]
    fn test_empty_content_is_one_blank_line() {
        assert_eq!(count_lines("", "cs"), c(1, 0, 0, 1));
    }

    #[test]
    fn test_python_docstrings_and_hash() {
        let src = "\"\"\"doc\nmore\"\"\"\nx = 1\n# c";
        assert_eq!(count_lines(src, "py"), c(4, 1, 2, 1));

        let src = "'''a\nb\nc'''\ndef f():\n    pass";
        assert_eq!(count_lines(src, "py"), c(5, 2, 2, 1));
    }

    #[test]
    fn test_markup_comments() {
        assert_eq!(count_lines("<!-- a\nb -->\n<p>x</p>", "html"), c(3, 1, 1, 1));
        assert_eq!(count_lines("<Grid>\n<!-- x -->\n</Grid>", "xaml"), c(3, 2, 0, 1));
    }

    #[test]
    fn test_css_has_no_single_line_pattern() {
        assert_eq!(count_lines("// not css\n/* a\nb */", "css"), c(3, 1, 1, 1));
        assert_eq!(count_lines("// scss\n$x: 1;", "scss"), c(2, 1, 1, 0));
    }

    #[test]
    fn test_jsx_comment_after_block_pass() {
        // The block pass strips the inner comment first, leaving `{}` as code
        assert_eq!(count_lines("{/* a\nb */}\n<div/>", "jsx"), c(3, 2, 1, 0));
        assert_eq!(count_lines("{/* a */}", "tsx"), c(1, 1, 0, 0));
    }

    #[test]
    fn test_robot_hash_comments() {
        assert_eq!(count_lines("# setup\nLog    hi\n", "robot"), c(3, 1, 1, 1));
    }

    #[test]
    fn test_unknown_extension_has_no_patterns() {
        assert_eq!(count_lines("// x\n/* y */", "rs"), c(2, 2, 0, 0));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let src = "# a\nprint(1)\n\n";
        assert_eq!(count_lines(src, "PY"), count_lines(src, "py"));
    }

    #[test]
    fn test_string_literal_looks_like_comment() {
        assert_eq!(count_lines("s = \"/* x\ny */\";", "js"), c(2, 1, 1, 0));
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(count_lines("// a\r\ncode();\r\n\r\n", "cs"), c(4, 1, 1, 2));
    }

    #[test]
    fn test_bare_cr_line_endings() {
        assert_eq!(count_lines("// a\rcode();\r// b", "js"), c(3, 1, 2, 0));
        assert_eq!(count_lines("/* x\ry */\rrun();\r", "cs"), c(4, 1, 1, 2));
    }

    #[test]
    fn test_invariant_holds_for_all_languages() {
        let samples = [
            "",
            "\n",
            "\n\n\n",
            "/* unterminated\ncomment",
            "/* a */ /* b */\n/* c\n*/",
            "<!-- x -->\n<!--\n-->\n",
            "\"\"\"\n\"\"\"\n'''\n'''",
            "{/* x */}\n// y\n# z\ncode\n   \n",
            "a\r\n\r\n/*\r\n*/\r\n",
        ];

        for lang in Language::ALL {
            for sample in samples {
                let counts = count_lines(sample, lang.extension());
                assert!(
                    counts.is_consistent(),
                    "{:?} on {:?}: {:?}",
                    lang,
                    sample,
                    counts
                );
                assert_eq!(counts.total, sample.split('\n').count());
            }
        }
    }

    #[test]
    fn test_count_file_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Main.cs");
        fs::write(&path, "// header\nclass A {}\n").unwrap();

        assert_eq!(count_file(&path, "cs").unwrap(), c(3, 1, 1, 1));
    }

    #[test]
    fn test_count_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(count_file(&dir.path().join("gone.cs"), "cs").is_err());
    }
}
