//! PyInstaller-based macOS bundling.
//!
//! Coordinates the environment preflight, the PyInstaller subprocess and the
//! post-build verification that produce `dist/CompetitorMonitor.app`, plus
//! the cleanup routine for build artifacts.

mod build;
mod clean;
mod error;
mod preflight;
mod pyinstaller;
mod settings;
pub(crate) mod utils;

pub use build::run_build;
pub use clean::run_clean;
pub use error::{Error, Result};
pub use settings::BundleSettings;
