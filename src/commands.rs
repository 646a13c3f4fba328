//! Dead branch strip command.

use crate::output;
use crate::stripper::{self, StripOutcome};
use crate::utils::{collect_source_files, normalize_display_path};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs over more files than this get a progress bar.
const PROGRESS_THRESHOLD: usize = 8;

/// Default file extensions processed when neither CLI nor config says
/// otherwise.
#[must_use]
pub fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"]
        .iter()
        .map(|&s| s.to_owned())
        .collect()
}

/// Options for the strip run.
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// Show what would change, write nothing.
    pub dry_run: bool,
    /// Write a `.bak` copy of each file before overwriting it.
    pub backup: bool,
    /// Machine output; suppresses all human-readable lines.
    pub json: bool,
    /// Report untouched files too.
    pub verbose: bool,
    /// Suppress everything but errors.
    pub quiet: bool,
    /// File extensions to process (without leading dot).
    pub extensions: Vec<String>,
    /// Folder names to skip when walking directories.
    pub exclude_folders: Vec<String>,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            backup: false,
            json: false,
            verbose: false,
            quiet: false,
            extensions: default_extensions(),
            exclude_folders: Vec::new(),
        }
    }
}

/// Per-file result of a strip run.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// File that changed (or would change under `--dry-run`).
    pub file: String,
    /// Blocks collapsed to their `else` alternative.
    pub collapsed: usize,
    /// Guard-less blocks deleted.
    pub removed: usize,
    /// Bytes shaved off the file.
    pub bytes_saved: usize,
}

/// Strip dead branches from every matching file under `paths`.
///
/// Files are read and transformed in parallel (the transform is pure);
/// writes and reporting stay sequential so output order is stable.
/// Unreadable or non-UTF-8 files are skipped with a warning, never a
/// hard error. Returns one report per changed file.
///
/// # Errors
///
/// Returns an error if writing a transformed file or its backup fails,
/// or if writing to the output writer fails.
pub fn run_strip<W: Write>(
    paths: &[PathBuf],
    options: &StripOptions,
    mut writer: W,
) -> Result<Vec<FileReport>> {
    let files = collect_targets(paths, options);
    let human = !options.json && !options.quiet;

    if files.is_empty() {
        if human {
            writeln!(writer, "{}", "No matching source files found.".yellow())?;
        }
        return Ok(vec![]);
    }

    if human {
        if options.dry_run {
            writeln!(
                writer,
                "\n{}",
                "[DRY-RUN] Dead branches that would be removed:".yellow()
            )?;
        } else {
            writeln!(writer, "\n{}", "Stripping dead branches...".cyan())?;
        }
    }

    let pb = (human && files.len() > PROGRESS_THRESHOLD)
        .then(|| output::create_progress_bar(files.len() as u64));

    // The strip itself is pure per-file work; fan it out.
    let results: Vec<(PathBuf, std::io::Result<(String, StripOutcome)>)> = files
        .par_iter()
        .map(|path| {
            let res = fs::read_to_string(path).map(|content| {
                let outcome = stripper::strip_with_stats(&content);
                (content, outcome)
            });
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            (path.clone(), res)
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let mut reports = Vec::new();

    for (path, res) in results {
        match res {
            Err(e) => {
                if human {
                    writeln!(
                        writer,
                        "  {} {}: {}",
                        "Skip:".yellow(),
                        normalize_display_path(&path),
                        e
                    )?;
                }
            }
            Ok((original, outcome)) if outcome.changed() => {
                let display = normalize_display_path(&path);

                if options.dry_run {
                    if human {
                        writeln!(
                            writer,
                            "  Would strip {display} ({} collapsed, {} removed)",
                            outcome.collapsed, outcome.removed
                        )?;
                    }
                } else {
                    if options.backup {
                        write_backup(&path, &original)?;
                    }
                    fs::write(&path, &outcome.text)?;
                    if human {
                        writeln!(
                            writer,
                            "  {} {display} ({} collapsed, {} removed)",
                            "Stripped:".green(),
                            outcome.collapsed,
                            outcome.removed
                        )?;
                    }
                }

                reports.push(FileReport {
                    file: display,
                    collapsed: outcome.collapsed,
                    removed: outcome.removed,
                    bytes_saved: original.len() - outcome.text.len(),
                });
            }
            Ok(_) => {
                if human && options.verbose {
                    writeln!(
                        writer,
                        "  {} {}",
                        "Clean:".dimmed(),
                        normalize_display_path(&path)
                    )?;
                }
            }
        }
    }

    if human {
        if reports.is_empty() {
            output::print_no_changes(&mut writer)?;
        } else {
            if reports.len() > 1 {
                output::print_summary_table(&mut writer, &reports)?;
            }
            if options.dry_run {
                writeln!(
                    writer,
                    "{}",
                    format!("{} file(s) would change.", reports.len()).yellow()
                )?;
            } else {
                output::print_success(&mut writer)?;
            }
        }
    }

    Ok(reports)
}

/// Expand the given paths into the sorted, deduplicated list of files to
/// process.
fn collect_targets(paths: &[PathBuf], options: &StripOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        files.extend(collect_source_files(
            path,
            &options.extensions,
            &options.exclude_folders,
        ));
    }
    files.sort();
    files.dedup();
    files
}

/// Write `<file>.bak` next to the file being overwritten.
fn write_backup(path: &Path, content: &str) -> std::io::Result<()> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    fs::write(PathBuf::from(backup), content)
}
