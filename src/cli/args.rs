//! Command line argument parsing.

use clap::{Parser, Subcommand};

/// macOS bundle builder for the Competitor Monitor desktop client
#[derive(Parser, Debug)]
#[command(
    name = "competitor_bundler",
    version,
    about = "Packages the Competitor Monitor desktop client into a macOS .app bundle",
    long_about = "Packages the Competitor Monitor desktop client into a double-clickable
macOS .app bundle by invoking PyInstaller with the project's fixed bundle
description, then reports the bundle path and size.

Run with no arguments from the desktop project directory to build; run the
`clean` subcommand to remove build artifacts.

Exit code 0 = the bundle exists at dist/CompetitorMonitor.app."
)]
pub struct Args {
    /// Subcommand to run; builds the bundle when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Bundler subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove build artifacts (build/, dist/, __pycache__/ and generated .spec files)
    Clean,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
