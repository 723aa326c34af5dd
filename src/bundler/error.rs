//! Error types for bundling operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while preflighting, invoking or verifying a bundle build.
#[derive(Error, Debug)]
pub enum Error {
    /// The external bundling tool is not installed or not runnable.
    #[error("{tool} not found on PATH. Install it with: pip install pyinstaller")]
    ToolNotFound {
        /// Name of the missing tool
        tool: String,
    },

    /// The operator declined to continue on a non-macOS host.
    #[error("build aborted: host OS is {os}, bundle target is macOS")]
    PlatformDeclined {
        /// Host operating system as reported by the runtime
        os: String,
    },

    /// PyInstaller exited with a non-zero status.
    #[error("PyInstaller build failed")]
    BuildFailed {
        /// Child process exit code, if any
        code: Option<i32>,
    },

    /// PyInstaller reported success but the bundle is missing.
    #[error(".app bundle not found after build, check the output directory: {}", .dist_dir.display())]
    MissingBundle {
        /// Directory the bundle was expected in
        dist_dir: PathBuf,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk errors while sizing the bundle
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Invalid glob pattern for spec-file cleanup
    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Glob iteration errors during spec-file cleanup
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// Generic errors
    #[error("{0}")]
    GenericError(String),
}
