//! Command-line interface definition.

use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.deadbranch.toml):
  Create this file in your project root to set defaults.

  [deadbranch]
  extensions = [\"ts\", \"tsx\"]          # File extensions to process
  exclude_folders = [\"generated\"]     # Skipped in addition to defaults
  backup = true                       # Keep a .bak copy of changed files

  CLI flags override configuration values.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output per-file results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (reports untouched files too).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: no per-file lines, no summary.
    #[arg(long)]
    pub quiet: bool,
}

/// Remove statically-dead `if (false)` branches from source files.
///
/// Blocks with an `else` alternative collapse to that alternative;
/// guard-less blocks are deleted entirely. Matching is textual over
/// balanced braces (one nesting level), never a full parse.
#[derive(Parser, Debug)]
#[command(name = "deadbranch", version, after_help = CONFIG_HELP)]
pub struct Cli {
    /// Files or directories to process. Directories are walked
    /// gitignore-aware. Defaults to the current directory.
    pub paths: Vec<PathBuf>,

    /// Show what would change without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Write a `<file>.bak` copy before overwriting each changed file.
    #[arg(long)]
    pub backup: bool,

    /// File extension to process (repeatable). Defaults to ts, tsx, js, jsx.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Folder name to skip when walking directories (repeatable).
    #[arg(long = "exclude-folders", value_name = "NAME")]
    pub exclude_folders: Vec<String>,

    /// Output options (json/verbose/quiet).
    #[command(flatten)]
    pub output: OutputOptions,
}
