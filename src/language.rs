//! Recognized file types and their comment syntax
//!
//! This module is the single source of truth for which extensions are counted,
//! how they are displayed in reports, and which regular expressions identify
//! their comments.

/// Whether a comment pattern applies to a single trimmed line or spans lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// Matched against the start of each trimmed line.
    SingleLine,
    /// Removed from the whole content before lines are classified.
    MultiLine,
}

/// A comment pattern as written in the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPattern {
    pub source: &'static str,
    pub kind: CommentKind,
}

const fn single(source: &'static str) -> CommentPattern {
    CommentPattern {
        source,
        kind: CommentKind::SingleLine,
    }
}

const fn multi(source: &'static str) -> CommentPattern {
    CommentPattern {
        source,
        kind: CommentKind::MultiLine,
    }
}

const SLASH_LINE: CommentPattern = single(r"//.*$");
const C_BLOCK: CommentPattern = multi(r"/\*[\s\S]*?\*/");
const JSX_BLOCK: CommentPattern = multi(r"\{/\*[\s\S]*?\*/\}");
const MARKUP_BLOCK: CommentPattern = multi(r"<!--[\s\S]*?-->");
const HASH_LINE: CommentPattern = single(r"#.*$");
const PY_DOUBLE_DOCSTRING: CommentPattern = multi(r#""""[\s\S]*?""""#);
const PY_SINGLE_DOCSTRING: CommentPattern = multi(r"'''[\s\S]*?'''");

const C_STYLE: &[CommentPattern] = &[SLASH_LINE, C_BLOCK];
// The JSX pattern runs after the plain block pattern has already removed the
// inner `/* */`, so it only ever sees what the first pass left behind.
const JSX_STYLE: &[CommentPattern] = &[SLASH_LINE, C_BLOCK, JSX_BLOCK];
const CSS_STYLE: &[CommentPattern] = &[C_BLOCK];
const MARKUP_STYLE: &[CommentPattern] = &[MARKUP_BLOCK];
const PYTHON_STYLE: &[CommentPattern] = &[HASH_LINE, PY_DOUBLE_DOCSTRING, PY_SINGLE_DOCSTRING];
const HASH_STYLE: &[CommentPattern] = &[HASH_LINE];

/// File types counted by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    CSharp,
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
    Css,
    Scss,
    Html,
    Xml,
    Xaml,
    Json,
    Python,
    Robot,
}

impl Language {
    /// Every recognized language, in the order of the extension table.
    pub const ALL: [Language; 13] = [
        Language::CSharp,
        Language::TypeScript,
        Language::Tsx,
        Language::JavaScript,
        Language::Jsx,
        Language::Css,
        Language::Scss,
        Language::Html,
        Language::Xml,
        Language::Xaml,
        Language::Json,
        Language::Python,
        Language::Robot,
    ];

    /// Detect language from a file extension.
    ///
    /// Matching is case-insensitive. Returns `None` for anything outside the
    /// fixed extension table.
    ///
    /// # Examples
    ///
    /// ```
    /// use linecensus::language::Language;
    ///
    /// assert_eq!(Language::from_extension("py"), Some(Language::Python));
    /// assert_eq!(Language::from_extension("TSX"), Some(Language::Tsx));
    /// assert_eq!(Language::from_extension("rs"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "cs" => Some(Language::CSharp),
            "ts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "js" => Some(Language::JavaScript),
            "jsx" => Some(Language::Jsx),
            "css" => Some(Language::Css),
            "scss" => Some(Language::Scss),
            "html" => Some(Language::Html),
            "xml" => Some(Language::Xml),
            "xaml" => Some(Language::Xaml),
            "json" => Some(Language::Json),
            "py" => Some(Language::Python),
            "robot" => Some(Language::Robot),
            _ => None,
        }
    }

    /// The lowercase extension this language is keyed by in results.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::CSharp => "cs",
            Language::TypeScript => "ts",
            Language::Tsx => "tsx",
            Language::JavaScript => "js",
            Language::Jsx => "jsx",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Xaml => "xaml",
            Language::Json => "json",
            Language::Python => "py",
            Language::Robot => "robot",
        }
    }

    /// Returns the human-readable name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "TypeScript (TSX)",
            Language::JavaScript => "JavaScript",
            Language::Jsx => "JavaScript (JSX)",
            Language::Css => "CSS",
            Language::Scss => "SCSS",
            Language::Html => "HTML",
            Language::Xml => "XML",
            Language::Xaml => "XAML",
            Language::Json => "JSON",
            Language::Python => "Python",
            Language::Robot => "Robot Framework",
        }
    }

    /// Identifier-safe name, used for report file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::JavaScript => "javascript",
            Language::Jsx => "jsx",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Xaml => "xaml",
            Language::Json => "json",
            Language::Python => "python",
            Language::Robot => "robot",
        }
    }

    /// Comment patterns in the order they are applied.
    ///
    /// Formats without comment syntax return an empty slice, so every
    /// non-blank line counts as code.
    pub fn comment_patterns(&self) -> &'static [CommentPattern] {
        match self {
            Language::CSharp | Language::TypeScript | Language::JavaScript | Language::Scss => {
                C_STYLE
            }
            Language::Tsx | Language::Jsx => JSX_STYLE,
            Language::Css => CSS_STYLE,
            Language::Html | Language::Xml | Language::Xaml => MARKUP_STYLE,
            Language::Json => &[],
            Language::Python => PYTHON_STYLE,
            Language::Robot => HASH_STYLE,
        }
    }
}

/// Display name for a result key, falling back to the uppercased extension.
pub fn language_display_name(ext: &str) -> String {
    Language::from_extension(ext)
        .map(|lang| lang.name().to_string())
        .unwrap_or_else(|| ext.to_uppercase())
}

/// Display name for a top-level directory, falling back to the raw name.
pub fn directory_display_name(dir: &str) -> &str {
    match dir {
        "AllyAssistBuilderInfrastructure" => "BuilderInfra",
        "AllyAssistOneAppAdmin" => "Admin",
        "AllyAssistOneAppPWA" => "PWA",
        "AllyAssistSeleniumTestCode" => "Test",
        other => other,
    }
}
