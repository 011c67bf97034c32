//! Console output for rendered reports

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::text::{LineStyle, Report};

fn style_spec(style: LineStyle) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    match style {
        LineStyle::Plain => return None,
        LineStyle::Rule => {
            spec.set_dimmed(true);
        }
        LineStyle::Title => {
            spec.set_bold(true);
        }
        LineStyle::Heading => {
            spec.set_fg(Some(Color::Cyan));
        }
    }
    Some(spec)
}

/// Write every line of `report` followed by a newline.
///
/// The text is identical to the report's plain form; only color escapes are
/// added when `out` supports them.
pub fn write_report<W: WriteColor>(out: &mut W, report: &Report) -> io::Result<()> {
    for line in report.lines() {
        match style_spec(line.style) {
            Some(spec) if !line.text.is_empty() => {
                out.set_color(&spec)?;
                write!(out, "{}", line.text)?;
                out.reset()?;
                writeln!(out)?;
            }
            _ => writeln!(out, "{}", line.text)?,
        }
    }
    Ok(())
}

/// Print `report` to stdout.
pub fn print_report(report: &Report, config: &OutputConfig) -> io::Result<()> {
    let color_choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(&mut stdout, report)?;
    stdout.flush()
}

/// Print the location the report was saved to.
pub fn print_saved_path(path: &std::path::Path) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\nReport saved to: {}", path.display())
}
