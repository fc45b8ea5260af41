//! Init command implementation

use anyhow::Result;
use std::process::ExitCode;

use crate::workflow::{init_manifest, InitOutcome};

pub fn run() -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    match init_manifest(&cwd) {
        Ok(InitOutcome::Created(path)) => println!("Created {}", path.display()),
        Ok(InitOutcome::AlreadyExists(path)) => println!("{} already exists", path.display()),
        Err(err) => {
            println!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
