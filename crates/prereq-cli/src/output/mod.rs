//! Terminal output formatting and utilities.
//!
//! This module provides consistent output formatting across all commands,
//! including colors, JSON rendering and error messages.

pub mod colors;
pub mod errors;

use prereq_core::error::{PrereqError, PrereqResult};
use serde::Serialize;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print command output as is
    pub fn plain(&self, message: &str) {
        println!("{}", message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.colors.dim(message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", self.colors.yellow("⚠"), message);
    }

    /// Print a value as pretty JSON on stdout
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> PrereqResult<()> {
        println!("{}", render_json(value)?);
        Ok(())
    }
}

/// Render a value as pretty JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> PrereqResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| PrereqError::OutputRender {
        message: format!("JSON serialization failed: {}", e),
    })
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
