//! File system utilities for bundling.
//!
//! Provides idempotent removal and the recursive size walk used for the
//! bundle report.

use std::io;
use std::path::Path;

use tokio::fs;
use walkdir::WalkDir;

use crate::bundler::Result;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

/// Returns the total size in bytes of all files under `path`.
///
/// Subdirectories are walked recursively; only regular files contribute
/// their size. Symlinks are not followed.
pub fn dir_size(path: &Path) -> Result<u64> {
    let mut total = 0u64;
    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}

/// Formats a byte count as mebibytes with one decimal, e.g. `3.0 MB`.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / BYTES_PER_MB)
}
