//! Utility functions and helpers.
//!
//! Common functionality used across multiple prereq crates.

pub mod name;

// Re-export commonly used utilities
pub use name::{is_valid_item_name, validate_item_name};
