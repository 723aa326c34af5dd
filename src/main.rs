//! Competitor Bundler - macOS .app packager for the Competitor Monitor desktop client.
//!
//! This binary wraps PyInstaller to freeze the desktop application into a
//! double-clickable `.app` bundle, with preflight checks, artifact verification
//! and a cleanup mode for build artifacts.

mod bundler;
mod cli;
mod error;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
