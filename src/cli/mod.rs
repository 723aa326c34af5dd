//! Command line interface for the Competitor Monitor bundler.

mod args;
mod output;

pub use args::{Args, Command};
pub use output::OutputManager;

use crate::bundler::{self, BundleSettings};
use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let output = OutputManager::new(true, false);
    let project_dir = std::env::current_dir()?;

    match args.command {
        Some(Command::Clean) => {
            bundler::run_clean(&project_dir, &output).await?;
        }
        None => {
            let settings = BundleSettings::default();
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            bundler::run_build(&project_dir, &settings, &mut input, &output).await?;
        }
    }

    Ok(0)
}
