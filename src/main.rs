//! Main binary entry point for the deadbranch tool.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()`
//! function so the CLI behaves identically under tests and in production.

use anyhow::Result;

fn main() -> Result<()> {
    let code = deadbranch::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
