//! Build orchestration for the macOS bundle.
//!
//! Runs the environment preflight, delegates the actual packaging to
//! PyInstaller and verifies the produced bundle before reporting.

use std::io::BufRead;
use std::path::Path;

use crate::cli::OutputManager;

use super::preflight;
use super::pyinstaller;
use super::settings::BundleSettings;
use super::utils::fs::{dir_size, format_size_mb};
use super::{Error, Result};

/// Builds the `.app` bundle in `project_dir`.
///
/// Blocks until PyInstaller terminates. The platform-mismatch confirmation
/// is read from `input`; all user-facing reporting goes through `output`.
pub async fn run_build(
    project_dir: &Path,
    settings: &BundleSettings,
    input: &mut impl BufRead,
    output: &OutputManager,
) -> Result<()> {
    output.section(&format!(
        "Building {} for macOS",
        settings.product_name
    ))?;

    output.progress("Checking PyInstaller...")?;
    let version = preflight::check_pyinstaller().await?;
    output.success(&format!("PyInstaller {}", version))?;

    preflight::check_platform(std::env::consts::OS, input, output)?;

    let args = pyinstaller::pyinstaller_args(settings);
    output.progress(&format!("Launching build: {}.app", settings.product_name))?;
    pyinstaller::invoke(project_dir, &args).await?;

    // Exit code 0 alone is not trusted: the bundle must actually exist.
    let size = verify_bundle(project_dir, settings)?;
    let app_path = settings.app_bundle_path(project_dir);

    output.section("Build finished successfully")?;
    output.info(&format!("Bundle: {}", app_path.display()))?;
    output.info(&format!("Size: {}", format_size_mb(size)))?;
    output.info("To run:")?;
    output.indent("1. Start the backend: python run.py")?;
    output.indent(&format!(
        "2. Open {}.app from the dist/ folder",
        settings.product_name
    ))?;
    output.indent(&format!("3. Or from a terminal: open {}", app_path.display()))?;
    output.warn("First launch may be blocked by Gatekeeper.")?;
    output.indent("Allow the app under System Settings > Privacy & Security.")?;

    Ok(())
}

/// Verifies the bundle exists and returns its total size in bytes.
fn verify_bundle(project_dir: &Path, settings: &BundleSettings) -> Result<u64> {
    let app_path = settings.app_bundle_path(project_dir);
    if !app_path.exists() {
        return Err(Error::MissingBundle {
            dist_dir: settings.dist_dir(project_dir),
        });
    }
    dir_size(&app_path)
}
