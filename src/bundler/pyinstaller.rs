//! PyInstaller argument construction and invocation.

use std::path::Path;

use super::preflight::PYINSTALLER;
use super::settings::BundleSettings;
use super::{Error, Result};

/// Path-list separator PyInstaller expects in `--add-data` values.
#[cfg(windows)]
const DATA_SEPARATOR: char = ';';
#[cfg(not(windows))]
const DATA_SEPARATOR: char = ':';

/// Builds the PyInstaller argument vector for the given bundle settings.
///
/// The order is fixed: name, mode flags, bundle identifier, embedded data
/// files, hidden imports, then the entry-point script.
pub fn pyinstaller_args(settings: &BundleSettings) -> Vec<String> {
    let mut args = vec!["--name".to_string(), settings.product_name.clone()];

    if settings.onefile {
        args.push("--onefile".into());
    }
    if settings.windowed {
        args.push("--windowed".into());
    }
    if settings.overwrite {
        args.push("--noconfirm".into());
    }
    if settings.clean_cache {
        args.push("--clean".into());
    }

    args.push("--osx-bundle-identifier".into());
    args.push(settings.bundle_identifier());

    for data_file in &settings.data_files {
        args.push("--add-data".into());
        args.push(format!("{}{}.", data_file, DATA_SEPARATOR));
    }

    for hidden_import in &settings.hidden_imports {
        args.push("--hidden-import".into());
        args.push(hidden_import.clone());
    }

    args.push(settings.entry_point.clone());
    args
}

/// Runs PyInstaller with the given arguments, cwd pinned to the project
/// directory, and waits for it to finish.
///
/// The child inherits stdout/stderr so build progress streams straight to the
/// terminal. Fails with [`Error::BuildFailed`] on a non-zero exit status.
pub async fn invoke(project_dir: &Path, args: &[String]) -> Result<()> {
    log::debug!("Invoking {} {}", PYINSTALLER, args.join(" "));

    let status = tokio::process::Command::new(PYINSTALLER)
        .args(args)
        .current_dir(project_dir)
        .status()
        .await
        .map_err(|e| Error::GenericError(format!("Failed to execute {}: {}", PYINSTALLER, e)))?;

    if !status.success() {
        return Err(Error::BuildFailed {
            code: status.code(),
        });
    }
    Ok(())
}
