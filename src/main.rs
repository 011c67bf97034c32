//! CLI entry point for linecensus

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use linecensus::output::{
    OutputConfig, REPORT_FILE_NAME, Report, detailed_report_file_name, print_json, print_report,
    print_saved_path, render_detailed, render_report,
};
use linecensus::{Language, ScanError, scan_directory, scan_files};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_extension(s.trim_start_matches('.')).ok_or_else(|| {
        let known: Vec<_> = Language::ALL.iter().map(|l| l.extension()).collect();
        format!(
            "unrecognized extension '{}' (expected one of: {})",
            s,
            known.join(", ")
        )
    })
}

#[derive(Parser, Debug)]
#[command(name = "linecensus")]
#[command(about = "Count code, comment and blank lines by top-level directory and language")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print the results as JSON instead of the text report
    /// (the report file is still written)
    #[arg(long = "json", conflicts_with = "detailed")]
    json: bool,

    /// Per-file report for one language, grouped by directory
    /// (default: cs)
    #[arg(
        long = "detailed",
        value_name = "EXT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "cs",
        value_parser = parse_language
    )]
    detailed: Option<Language>,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    let root = std::path::absolute(&args.path).unwrap_or_else(|_| args.path.clone());
    let config = OutputConfig {
        use_color: should_use_color(args.color),
        json: args.json,
    };

    let result = match args.detailed {
        Some(language) => run_detailed(&root, language, &config),
        None => run_summary(&root, &config),
    };

    if let Err(e) = result {
        eprintln!("linecensus: {}", e);
        process::exit(1);
    }
}

fn run_summary(root: &Path, config: &OutputConfig) -> linecensus::Result<()> {
    let table = scan_directory(root)?;

    info!("generating report");
    let report = render_report(&table);

    if config.json {
        print_json(&table)?;
    } else {
        print_report(&report, config)?;
    }

    save(&report, &root.join(REPORT_FILE_NAME), config)
}

fn run_detailed(root: &Path, language: Language, config: &OutputConfig) -> linecensus::Result<()> {
    let records = scan_files(root, language)?;

    info!("generating detailed report");
    let report = render_detailed(&records, language);
    print_report(&report, config)?;

    save(&report, &root.join(detailed_report_file_name(language)), config)
}

fn save(report: &Report, path: &Path, config: &OutputConfig) -> Result<(), ScanError> {
    report.save(path)?;
    info!(path = %path.display(), "report saved");
    if !config.json {
        print_saved_path(path)?;
    }
    Ok(())
}
