//! macOS bundler library for the Competitor Monitor desktop client
//!
//! This library wraps PyInstaller to create a standalone `.app` bundle from
//! the desktop application sources:
//! - environment preflight (tool availability, host platform gate)
//! - fixed argument vector construction and subprocess invocation
//! - bundle verification and size reporting
//! - cleanup of build artifacts
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, Result};
