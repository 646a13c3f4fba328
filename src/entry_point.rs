//! CLI entry point: argument parsing, configuration merging and dispatch.

use crate::cli::Cli;
use crate::commands::{self, StripOptions};
use crate::config::Config;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Run deadbranch with the given arguments, writing output to stdout.
///
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error if command execution fails (I/O on transformed
/// files or the output stream).
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run deadbranch with the given arguments, writing output to the
/// specified writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["deadbranch".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, captured by the writer.
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    // Load config relative to the first path or the current directory.
    let config_anchor = cli
        .paths
        .first()
        .map_or(Path::new("."), PathBuf::as_path);
    let config = Config::load_from_path(config_anchor);

    // CLI flags win over configuration values.
    let extensions = if cli.extensions.is_empty() {
        config
            .deadbranch
            .extensions
            .clone()
            .unwrap_or_else(commands::default_extensions)
    } else {
        cli.extensions.clone()
    };

    let mut exclude_folders = config.deadbranch.exclude_folders.clone().unwrap_or_default();
    exclude_folders.extend(cli.exclude_folders.clone());

    let backup = cli.backup || config.deadbranch.backup.unwrap_or(false);

    if cli.output.verbose && !cli.output.json {
        eprintln!("[VERBOSE] deadbranch v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Config: {}", path.display());
        }
        eprintln!("[VERBOSE] Extensions: {extensions:?}");
        eprintln!("[VERBOSE] Excludes: {exclude_folders:?}");
        eprintln!();
    }

    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };

    for path in &paths {
        if !path.exists() {
            eprintln!(
                "Error: The file or directory '{}' does not exist.",
                path.display()
            );
            return Ok(1);
        }
    }

    let options = StripOptions {
        dry_run: cli.dry_run,
        backup,
        json: cli.output.json,
        verbose: cli.output.verbose,
        quiet: cli.output.quiet,
        extensions,
        exclude_folders,
    };

    let reports = commands::run_strip(&paths, &options, &mut *writer)?;

    if cli.output.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&reports)?)?;
    }

    Ok(0)
}
