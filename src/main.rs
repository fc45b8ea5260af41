//! agmd: compose AGENTS.md from GitHub-hosted AGENTS.md files
//!
//! Maps project paths to GitHub locations in `agmd.yml` and regenerates the
//! project's AGENTS.md from them.

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    agmd::cli::run()
}
