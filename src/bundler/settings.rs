//! Bundle configuration for the desktop application.
//!
//! There is no external configuration surface: the desktop client ships with
//! one fixed bundle description, exposed through [`BundleSettings::default`].

use std::path::{Path, PathBuf};

/// Build-artifact directories removed by the cleanup routine.
pub const ARTIFACT_DIRS: &[&str] = &["build", "dist", "__pycache__"];

/// Glob pattern for PyInstaller-generated spec files, relative to the project directory.
pub const SPEC_FILE_GLOB: &str = "*.spec";

/// Directory PyInstaller writes the finished bundle into, relative to the project directory.
pub const DIST_DIR: &str = "dist";

/// Bundle description for a PyInstaller `.app` build.
///
/// Field values map one-to-one onto PyInstaller command-line options
/// (see [`pyinstaller_args`](crate::bundler::run_build)).
#[derive(Debug, Clone)]
pub struct BundleSettings {
    /// Product name; also names the `.app` bundle.
    pub product_name: String,

    /// Reverse-DNS organization prefix for the bundle identifier.
    pub identifier_prefix: String,

    /// Script PyInstaller uses as the application entry point.
    pub entry_point: String,

    /// Auxiliary source files embedded next to the executable (`--add-data`).
    pub data_files: Vec<String>,

    /// Dependencies PyInstaller's static analysis misses (`--hidden-import`).
    pub hidden_imports: Vec<String>,

    /// Pack everything into a single executable inside the bundle (`--onefile`).
    pub onefile: bool,

    /// GUI application, no console window (`--windowed`).
    pub windowed: bool,

    /// Overwrite previous output without prompting (`--noconfirm`).
    pub overwrite: bool,

    /// Clear the PyInstaller cache before building (`--clean`).
    pub clean_cache: bool,
}

impl Default for BundleSettings {
    fn default() -> Self {
        Self {
            product_name: "CompetitorMonitor".into(),
            identifier_prefix: "com.competitormonitor".into(),
            entry_point: "main.py".into(),
            data_files: vec!["styles.py".into(), "api_client.py".into()],
            hidden_imports: vec![
                "PyQt6".into(),
                "PyQt6.QtCore".into(),
                "PyQt6.QtWidgets".into(),
                "PyQt6.QtGui".into(),
                "requests".into(),
            ],
            onefile: true,
            windowed: true,
            overwrite: true,
            clean_cache: true,
        }
    }
}

impl BundleSettings {
    /// Returns the reverse-DNS bundle identifier, derived from the lower-cased
    /// product name.
    pub fn bundle_identifier(&self) -> String {
        format!(
            "{}.{}",
            self.identifier_prefix,
            self.product_name.to_lowercase()
        )
    }

    /// Returns the path the finished `.app` bundle is expected at.
    pub fn app_bundle_path(&self, project_dir: &Path) -> PathBuf {
        project_dir
            .join(DIST_DIR)
            .join(format!("{}.app", self.product_name))
    }

    /// Returns the output directory the bundle is written into.
    pub fn dist_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(DIST_DIR)
    }
}
