//! Error types and result aliases for prereq operations.
//!
//! Provides a unified error type covering graph construction, resolution,
//! path queries and catalog loading, with actionable messages.

use thiserror::Error;

/// Unified error type for all prereq operations
#[derive(Error, Debug)]
pub enum PrereqError {
    // Graph construction errors
    #[error("Invalid cost {cost} for '{name}': costs must be finite and non-negative")]
    InvalidCost { name: String, cost: f64 },

    // Resolution errors
    #[error("Circular dependency detected among: {}", .members.join(", "))]
    CircularDependency { members: Vec<String> },

    #[error("Aggregated cost of '{name}' exceeds the representable range")]
    CostOverflow { name: String },

    // Query errors
    #[error("Unknown item '{name}'")]
    UnknownItem { name: String },

    // Config errors
    #[error("Failed to parse prereq.toml: {message}")]
    TomlParse { message: String },

    #[error("Failed to parse courses.json: {message}")]
    JsonParse { message: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // Output errors
    #[error("Failed to render output: {message}")]
    OutputRender { message: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for prereq operations
pub type PrereqResult<T> = Result<T, PrereqError>;

impl PrereqError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a circular dependency error from any iterator of member names
    pub fn circular<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CircularDependency {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Members of the cycle, if this is a circular dependency error
    pub fn cycle_members(&self) -> Option<&[String]> {
        match self {
            PrereqError::CircularDependency { members } => Some(members),
            _ => None,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            PrereqError::CircularDependency { .. } => Some(
                "Remove one prerequisite from the cycle, or resolve with the merge policy to treat it as one unit",
            ),
            PrereqError::UnknownItem { .. } => {
                Some("Check the item name spelling; names are case-sensitive")
            },
            PrereqError::InvalidCost { .. } => Some("Use a cost of zero or more"),
            PrereqError::CostOverflow { .. } => {
                Some("Lower the costs along this item's prerequisite chain")
            },
            PrereqError::TomlParse { .. } | PrereqError::JsonParse { .. } => {
                Some("Fix the syntax error in the catalog file and try again")
            },
            _ => None,
        }
    }
}
