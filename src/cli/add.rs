//! Add command implementation

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use crate::config::Settings;
use crate::fetch::HttpFetcher;
use crate::workflow::add_mapping;

#[derive(Args)]
pub struct AddArgs {
    /// GitHub slug (owner/repo[/path])
    #[arg(value_name = "GITHUB_PATH")]
    pub github_path: String,

    /// Local path key to map in agmd.yml (defaults to project root)
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub path: String,
}

pub fn run(args: AddArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load()?;
    let fetcher = HttpFetcher::new(&settings)?;

    match add_mapping(&cwd, &args.github_path, &args.path, &fetcher) {
        Ok(outcome) => {
            println!(
                "Updated {} with mapping '{}' -> '{}'",
                outcome.files.manifest.display(),
                outcome.key,
                outcome.slug
            );
            println!("Refreshed {}", outcome.files.agents.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
