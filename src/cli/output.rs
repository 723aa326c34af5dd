//! Colored terminal output for user-facing reporting.
//!
//! Diagnostics go through the `log` crate; everything the operator is meant
//! to read goes through [`OutputManager`].

use std::io::{self, Write};

use console::style;

/// Manages colored terminal output with verbose/quiet modes.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "{}", message)
    }

    /// Print a verbose message, shown only in verbose mode
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.quiet || !self.verbose {
            return Ok(());
        }
        writeln!(io::stdout(), "{}", style(message).dim())
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "{} {}", style("✓").green(), message)
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "{} {}", style("⚠").yellow(), message)
    }

    /// Print an error message
    #[allow(dead_code)] // Public API - preserved for external consumers
    pub fn error(&self, message: &str) -> io::Result<()> {
        writeln!(io::stderr(), "{} {}", style("✗").red(), message)
    }

    /// Print a progress message
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "{} {}", style("•").cyan(), message)
    }

    /// Print a section header
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = io::stdout();
        writeln!(out)?;
        writeln!(out, "{}", style("═".repeat(60)).bold())?;
        writeln!(out, "{}", style(title).bold())?;
        writeln!(out, "{}", style("═".repeat(60)).bold())
    }

    /// Print an indented line
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "   {}", message)
    }

    /// Print a prompt without a trailing newline and flush
    pub fn prompt(&self, message: &str) -> io::Result<()> {
        let mut out = io::stdout();
        write!(out, "{}", message)?;
        out.flush()
    }
}
