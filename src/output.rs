//! Rich CLI output: progress reporting and summary tables.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use crate::commands::FileReport;

/// Create a progress bar for a known file count.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
#[must_use]
pub fn create_progress_bar(total_files: u64) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.set_message("stripping...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.tick();
    pb
}

/// Print the per-file summary table for a multi-file run.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary_table(writer: &mut impl Write, reports: &[FileReport]) -> std::io::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("Collapsed").add_attribute(Attribute::Bold),
            Cell::new("Removed").add_attribute(Attribute::Bold),
            Cell::new("Bytes saved").add_attribute(Attribute::Bold),
        ]);

    for report in reports {
        table.add_row(vec![
            Cell::new(&report.file),
            Cell::new(report.collapsed),
            Cell::new(report.removed),
            Cell::new(report.bytes_saved),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

/// Print the closing line for a run that applied changes.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_success(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "{}", "Dead branches removed successfully".green())
}

/// Print the closing line for a run that found nothing to strip.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_no_changes(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "{}", "No dead branches found.".dimmed())
}
