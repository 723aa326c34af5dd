//! Cleanup of build artifacts.

use std::path::Path;

use crate::cli::OutputManager;

use super::settings::{ARTIFACT_DIRS, SPEC_FILE_GLOB};
use super::utils::fs::remove_dir_all;
use super::{Error, Result};

/// Removes build artifacts from `project_dir`.
///
/// Deletes the intermediate build directory, the output directory, the
/// bytecode cache and any generated spec files, reporting each removal.
/// Absent entries are skipped, so repeated runs succeed with nothing to do.
pub async fn run_clean(project_dir: &Path, output: &OutputManager) -> Result<()> {
    output.progress("Cleaning build artifacts...")?;

    for dir_name in ARTIFACT_DIRS {
        let dir_path = project_dir.join(dir_name);
        if dir_path.exists() {
            remove_dir_all(&dir_path).await?;
            output.indent(&format!("Removed: {}/", dir_name))?;
        }
    }

    let pattern = project_dir.join(SPEC_FILE_GLOB);
    let pattern = pattern.to_str().ok_or_else(|| {
        Error::GenericError("Invalid project path (contains non-UTF8 characters)".into())
    })?;
    for entry in glob::glob(pattern)? {
        let spec_file = entry?;
        tokio::fs::remove_file(&spec_file).await?;
        output.indent(&format!(
            "Removed: {}",
            spec_file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| spec_file.display().to_string())
        ))?;
    }

    output.success("Clean complete")?;
    Ok(())
}
