//! Catalog configuration for prereq
//!
//! This crate handles parsing and validation of prereq.toml and courses.json
//! catalogs, and layers global, project, environment and command-line
//! settings into a single resolved configuration.

pub mod catalog;
pub mod json;
pub mod merge;

// Re-export main types
pub use catalog::{Catalog, CourseSpec, ResolverSection};
pub use json::CoursesJson;
pub use merge::{ConfigLayering, ConfigLoader, ConfigSource};

use prereq_core::error::PrereqError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, PrereqError>;
