//! Environment preflight for bundle builds.
//!
//! Detects the external bundling tool and gates building on the host
//! platform before any subprocess work starts.

use std::io::BufRead;

use crate::cli::OutputManager;

use super::{Error, Result};

/// Name of the external bundling tool resolved on PATH.
pub const PYINSTALLER: &str = "pyinstaller";

/// Operating system the produced bundle is built for.
pub const BUNDLE_TARGET_OS: &str = "macos";

/// Resolves PyInstaller on PATH and probes it with `--version`.
///
/// Returns the reported version string. Fails with [`Error::ToolNotFound`]
/// when the tool is absent or not runnable, before any build work starts.
pub async fn check_pyinstaller() -> Result<String> {
    let path = which::which(PYINSTALLER).map_err(|e| {
        log::debug!("{} not found in PATH: {}", PYINSTALLER, e);
        Error::ToolNotFound {
            tool: PYINSTALLER.to_string(),
        }
    })?;
    log::debug!("Found {} at: {}", PYINSTALLER, path.display());

    let output = tokio::process::Command::new(&path)
        .arg("--version")
        .output()
        .await
        .map_err(|e| {
            log::warn!(
                "{} found at {} but failed to execute: {}. Check file permissions.",
                PYINSTALLER,
                path.display(),
                e
            );
            Error::ToolNotFound {
                tool: PYINSTALLER.to_string(),
            }
        })?;

    if !output.status.success() {
        log::warn!(
            "{} found at {} but --version check failed (exit code: {:?}). Stderr: {}",
            PYINSTALLER,
            path.display(),
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
        return Err(Error::ToolNotFound {
            tool: PYINSTALLER.to_string(),
        });
    }

    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    log::info!("✓ {} available: {}", PYINSTALLER, version);
    Ok(version)
}

/// Gates the build on the host platform.
///
/// Passes silently when `host_os` matches the bundle target. Otherwise warns
/// and asks for confirmation on `input`; a case-insensitive `y` continues,
/// anything else aborts with [`Error::PlatformDeclined`].
pub fn check_platform(
    host_os: &str,
    input: &mut impl BufRead,
    output: &OutputManager,
) -> Result<()> {
    if host_os == BUNDLE_TARGET_OS {
        return Ok(());
    }

    output.warn(&format!(
        "This bundler targets macOS (current OS: {})",
        host_os
    ))?;
    output.prompt("Continue? (y/n): ")?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        Ok(())
    } else {
        Err(Error::PlatformDeclined {
            os: host_os.to_string(),
        })
    }
}
