//! Core library for the deadbranch dead-code stripping tool.
//!
//! deadbranch removes conditional blocks guarded by a literal false
//! condition from source text: `if (false) { ... } else { ... }`
//! collapses to its alternative branch, a guard-less `if (false) { ... }`
//! is deleted whole. Matching is textual over balanced braces (one
//! nesting level), never a parse of the host language.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling the strip command and its execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module defining the entry point logic shared by the binary and tests.
pub mod entry_point;

/// Module for rich CLI output formatting with colored text and progress.
pub mod output;

/// Module applying byte-range edits to text buffers.
pub mod rewrite;

/// Module containing the core block stripping logic.
pub mod stripper;

/// Module containing file collection and path helpers.
pub mod utils;

pub use stripper::{strip, strip_with_stats, StripOutcome};
